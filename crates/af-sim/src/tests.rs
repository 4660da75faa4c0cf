//! Integration tests for af-sim.

use std::collections::HashMap;

use af_core::{AgentId, AssignPolicy, FarmConfig, Point, RoomId, SearchLimits, SelectionStrategy};
use af_graph::RoomGraph;

use crate::{FarmBuilder, NoopObserver, SimObserver, Solution, Turn};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn graph(rooms: &[&str], links: &[(&str, &str)]) -> RoomGraph {
    let mut g = RoomGraph::new();
    for (i, name) in rooms.iter().enumerate() {
        g.add_room(name, Point::new(i as i64, 0));
    }
    for (a, b) in links {
        g.add_link(a, b).unwrap();
    }
    g
}

fn solve(g: RoomGraph, start: &str, end: &str, ants: usize) -> (Solution, RoomGraph) {
    let farm = FarmBuilder::new(FarmConfig::new(ants), g)
        .start(start)
        .end(end)
        .build()
        .unwrap();
    let solution = farm.solve(&mut NoopObserver);
    (solution, farm.graph().clone())
}

/// Render turns the way the move log is printed: `L<n>-<room>`.
fn lines(turns: &[Turn], g: &RoomGraph) -> Vec<String> {
    turns
        .iter()
        .map(|t| {
            t.moves
                .iter()
                .map(|m| format!("L{}-{}", m.agent.number(), g.name(m.room)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Rooms each ant entered, in order.
fn trails(turns: &[Turn]) -> HashMap<AgentId, Vec<RoomId>> {
    let mut out: HashMap<AgentId, Vec<RoomId>> = HashMap::new();
    for turn in turns {
        for m in &turn.moves {
            out.entry(m.agent).or_default().push(m.room);
        }
    }
    out
}

/// Chain S-X-Y-E plus a direct S-E link; discovery order is
/// `[S,X,Y,E]` then `[S,E]`.
fn unequal_pair() -> RoomGraph {
    graph(&["S", "X", "Y", "E"], &[("S", "X"), ("X", "Y"), ("Y", "E"), ("S", "E")])
}

/// Two vertex-disjoint three-room paths S-A-E and S-B-E.
fn equal_pair() -> RoomGraph {
    graph(&["S", "A", "B", "E"], &[("S", "A"), ("A", "E"), ("S", "B"), ("B", "E")])
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;
    use af_core::CoreError;

    #[test]
    fn zero_agents_rejected() {
        let result = FarmBuilder::new(FarmConfig::new(0), equal_pair())
            .start("S")
            .end("E")
            .build();
        assert!(matches!(result, Err(SimError::Core(CoreError::InvalidAgentCount(0)))));
    }

    #[test]
    fn missing_endpoint_rejected() {
        let result = FarmBuilder::new(FarmConfig::new(1), equal_pair()).start("S").build();
        assert!(matches!(result, Err(SimError::EndpointsUndefined { .. })));
    }

    #[test]
    fn empty_or_unknown_endpoint_rejected() {
        for (s, e) in [("", "E"), ("S", ""), ("S", "nowhere")] {
            let result = FarmBuilder::new(FarmConfig::new(1), equal_pair())
                .start(s)
                .end(e)
                .build();
            assert!(matches!(result, Err(SimError::EndpointsUndefined { .. })), "{s}-{e}");
        }
    }

    #[test]
    fn endpoints_resolved() {
        let farm = FarmBuilder::new(FarmConfig::new(2), equal_pair())
            .start("S")
            .end("E")
            .selection(SelectionStrategy::Maximum)
            .assignment(AssignPolicy::RoundRobin)
            .build()
            .unwrap();
        assert_eq!(farm.graph().name(farm.start()), "S");
        assert_eq!(farm.graph().name(farm.end()), "E");
        assert_eq!(farm.config().selection, SelectionStrategy::Maximum);
        assert_eq!(farm.config().assignment, AssignPolicy::RoundRobin);
    }

    #[test]
    fn from_colony_uses_its_parameters() {
        let colony = af_graph::load_colony_reader(std::io::Cursor::new(
            "2\n##start\nS 0 0\n##end\nE 1 0\nS-E\n",
        ))
        .unwrap();
        let farm = FarmBuilder::from_colony(colony).build().unwrap();
        assert_eq!(farm.config().agent_count, 2);
        let solution = farm.solve(&mut NoopObserver);
        assert_eq!(lines(&solution.turns, farm.graph()), ["L1-E L2-E"]);
    }

    #[test]
    fn limits_reach_the_enumerator() {
        let farm = FarmBuilder::new(FarmConfig::new(1), unequal_pair())
            .limits(SearchLimits { max_paths: Some(1), max_rooms: None })
            .start("S")
            .end("E")
            .build()
            .unwrap();
        assert_eq!(farm.solve(&mut NoopObserver).paths.len(), 1);
    }
}

// ── Worked scenarios ──────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn a_direct_link_single_ant() {
        let (sol, g) = solve(graph(&["A", "B"], &[("A", "B")]), "A", "B", 1);
        assert_eq!(sol.paths.len(), 1);
        assert_eq!(sol.selected.len(), 1);
        assert_eq!(lines(&sol.turns, &g), ["L1-B"]);
    }

    #[test]
    fn b_single_file_chain() {
        let g = graph(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D")]);
        let (sol, g) = solve(g, "A", "D", 3);
        assert_eq!(sol.selected.len(), 1);
        assert_eq!(sol.selected[0].len(), 4);
        // 3 ants + (4 - 2) rooms of staggering.
        assert_eq!(sol.turn_count(), 5);
        assert_eq!(
            lines(&sol.turns, &g),
            ["L1-B", "L1-C L2-B", "L1-D L2-C L3-B", "L2-D L3-C", "L3-D"],
        );
    }

    #[test]
    fn c_equal_disjoint_paths_split_evenly() {
        let (sol, g) = solve(equal_pair(), "S", "E", 4);
        assert_eq!(sol.selected.len(), 2);
        assert_eq!(sol.assignment.loads(), &[2, 2]);
        // Both paths move in lock-step; the second ant on each path trails
        // the first by one turn.
        assert_eq!(lines(&sol.turns, &g), ["L1-A L2-B", "L1-E L2-E L3-A L4-B", "L3-E L4-E"]);
    }

    #[test]
    fn c_one_ant_per_path_takes_edge_count_turns() {
        let (sol, _) = solve(equal_pair(), "S", "E", 2);
        assert_eq!(sol.turn_count(), sol.selected[0].edge_count());
    }

    #[test]
    fn d_no_route_is_not_an_error() {
        let g = graph(&["S", "A", "E"], &[("S", "A")]);
        for ants in [1, 5, 100] {
            let (sol, _) = solve(g.clone(), "S", "E", ants);
            assert!(sol.paths.is_empty());
            assert!(sol.selected.is_empty());
            assert!(sol.is_unroutable());
            assert_eq!(sol.turn_count(), 0);
            assert_eq!(sol.move_count(), 0);
        }
    }

    #[test]
    fn e_unequal_paths_both_used() {
        let (sol, g) = solve(unequal_pair(), "S", "E", 5);
        assert_eq!(sol.selected.len(), 2);
        assert!(sol.assignment.loads().iter().all(|&l| l > 0));
        assert_eq!(
            lines(&sol.turns, &g),
            ["L1-E L2-E L3-X L4-E", "L3-Y L5-X", "L3-E L5-Y", "L5-E"],
        );
        // Long path (3 moves) plus one turn queued behind ant 3.
        assert_eq!(sol.turn_count(), sol.selected[0].edge_count() + 1);
    }
}

// ── Move-log properties ───────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    /// A denser colony with several overlapping routes.
    fn lattice() -> RoomGraph {
        graph(
            &["S", "a", "b", "c", "d", "e", "f", "E"],
            &[
                ("S", "a"), ("S", "b"), ("S", "c"),
                ("a", "d"), ("b", "d"), ("b", "e"), ("c", "f"),
                ("d", "E"), ("e", "E"), ("f", "E"), ("a", "b"),
            ],
        )
    }

    fn check(sol: &Solution, ants: usize) {
        let trails = trails(&sol.turns);
        assert_eq!(trails.len(), ants, "every ant moves at least once");

        for (agent, path_id) in sol.assignment.iter() {
            let path = &sol.selected[path_id.index()];
            assert_eq!(trails[&agent].as_slice(), &path.rooms()[1..], "{agent}");
        }

        // Replay: no ordinary room ever holds two ants at a turn boundary.
        let start = sol.selected[0].start();
        let end   = sol.selected[0].end();
        let mut at: HashMap<AgentId, RoomId> = HashMap::new();
        for turn in &sol.turns {
            let mut seen_in_turn = Vec::new();
            for m in &turn.moves {
                assert!(!seen_in_turn.contains(&m.agent), "ant moved twice in one turn");
                seen_in_turn.push(m.agent);
                at.insert(m.agent, m.room);
            }
            let mut rooms: Vec<RoomId> = at
                .values()
                .copied()
                .filter(|&r| r != start && r != end)
                .collect();
            let before = rooms.len();
            rooms.sort();
            rooms.dedup();
            assert_eq!(rooms.len(), before, "room shared at turn boundary");
        }
    }

    #[test]
    fn greedy_move_log_is_consistent() {
        for ants in [1, 2, 3, 7, 20] {
            let (sol, _) = solve(lattice(), "S", "E", ants);
            check(&sol, ants);
        }
    }

    #[test]
    fn maximum_move_log_is_consistent() {
        for ants in [1, 4, 9] {
            let farm = FarmBuilder::new(FarmConfig::new(ants), lattice())
                .start("S")
                .end("E")
                .selection(SelectionStrategy::Maximum)
                .build()
                .unwrap();
            let sol = farm.solve(&mut NoopObserver);
            assert_eq!(sol.selected.len(), 3);
            check(&sol, ants);
        }
    }

    #[test]
    fn fewer_turns_with_maximum_selection() {
        let greedy = solve(lattice(), "S", "E", 12).0;
        let farm = FarmBuilder::new(FarmConfig::new(12), lattice())
            .start("S")
            .end("E")
            .selection(SelectionStrategy::Maximum)
            .build()
            .unwrap();
        let maximum = farm.solve(&mut NoopObserver);
        assert!(maximum.selected.len() >= greedy.selected.len());
        assert!(maximum.turn_count() <= greedy.turn_count());
    }

    #[test]
    fn solve_is_deterministic() {
        let farm = FarmBuilder::new(FarmConfig::new(6), lattice())
            .start("S")
            .end("E")
            .build()
            .unwrap();
        let a = farm.solve(&mut NoopObserver);
        let b = farm.solve(&mut NoopObserver);
        assert_eq!(a.turns, b.turns);
        assert_eq!(a.selected, b.selected);
    }
}

// ── Simulator stepping and occupancy ──────────────────────────────────────────

#[cfg(test)]
mod stepping {
    use super::*;
    use af_core::PathId;
    use af_graph::find_all_paths;
    use af_route::Assignment;
    use crate::{Capacity, Simulator};

    #[test]
    fn empty_path_set_finishes_immediately() {
        let g = graph(&["S", "E"], &[]);
        let assignment = Assignment::default();
        let mut sim = Simulator::new(&g, &[], &assignment);
        assert!(sim.is_finished());
        assert!(sim.step().is_none());
        assert!(sim.run(&mut NoopObserver).is_empty());
    }

    #[test]
    fn vacated_room_visible_within_turn() {
        let g = graph(&["S", "X", "Y", "E"], &[("S", "X"), ("X", "Y"), ("Y", "E")]);
        let paths = find_all_paths(&g, "S", "E");
        let assignment = Assignment::from_paths(vec![PathId(0), PathId(0)], 1).unwrap();
        let mut sim = Simulator::new(&g, &paths, &assignment);
        let x = g.room_id("X").unwrap();

        // Turn 1: ant 0 takes X, which then blocks ant 1 in the same turn.
        let t1 = sim.step().unwrap();
        assert_eq!(t1.moves.len(), 1);
        assert_eq!(sim.state().occupants(x), 1);

        // Turn 2: ant 0 leaves X before ant 1 is evaluated, so ant 1 enters.
        let t2 = sim.step().unwrap();
        assert_eq!(t2.moves.len(), 2);
        assert_eq!(t2.moves[1].agent, AgentId(1));
        assert_eq!(t2.moves[1].room, x);
        assert_eq!(sim.state().position(AgentId(1)), 1);
        assert_eq!(sim.turns_completed(), 2);
    }

    #[test]
    fn end_and_start_are_unbounded() {
        let g = graph(&["S", "E"], &[("S", "E")]);
        let paths = find_all_paths(&g, "S", "E");
        let assignment = Assignment::from_paths(vec![PathId(0); 4], 1).unwrap();
        let mut sim = Simulator::new(&g, &paths, &assignment);
        let (s, e) = (g.room_id("S").unwrap(), g.room_id("E").unwrap());
        assert_eq!(sim.state().capacity(s), Capacity::Unbounded);
        assert_eq!(sim.state().capacity(e), Capacity::Unbounded);
        assert_eq!(sim.state().occupants(s), 4);

        let turn = sim.step().unwrap();
        assert_eq!(turn.moves.len(), 4);
        assert_eq!(sim.state().occupants(e), 4);
        assert_eq!(sim.state().occupants(s), 0);
        assert!(sim.step().is_none());
        assert!(sim.is_finished());
    }

    #[test]
    fn capacity_rule() {
        assert!(Capacity::ROOM.admits(0));
        assert!(!Capacity::ROOM.admits(1));
        assert!(Capacity::Unbounded.admits(u32::MAX - 1));
        assert!(Capacity::Limited(3).admits(2));
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        started:  Vec<usize>,
        ended:    Vec<(usize, usize)>,
        finished: Option<usize>,
    }

    impl SimObserver for Recorder {
        fn on_turn_start(&mut self, number: usize) {
            self.started.push(number);
        }

        fn on_turn_end(&mut self, number: usize, turn: &Turn) {
            self.ended.push((number, turn.moves.len()));
        }

        fn on_sim_end(&mut self, total_turns: usize) {
            self.finished = Some(total_turns);
        }
    }

    #[test]
    fn callbacks_follow_turns() {
        let farm = FarmBuilder::new(FarmConfig::new(3), unequal_pair())
            .start("S")
            .end("E")
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let sol = farm.solve(&mut rec);

        assert_eq!(rec.ended.len(), sol.turn_count());
        assert_eq!(rec.ended.first().map(|e| e.0), Some(1));
        // The final, unproductive turn is started but never ended.
        assert_eq!(rec.started.len(), sol.turn_count() + 1);
        assert_eq!(rec.finished, Some(sol.turn_count()));
        let moved: usize = rec.ended.iter().map(|e| e.1).sum();
        assert_eq!(moved, sol.move_count());
    }

    #[test]
    fn unroutable_colony_still_reports_end() {
        let farm = FarmBuilder::new(FarmConfig::new(3), graph(&["S", "E"], &[]))
            .start("S")
            .end("E")
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        farm.solve(&mut rec);
        assert!(rec.ended.is_empty());
        assert_eq!(rec.finished, Some(0));
    }
}
