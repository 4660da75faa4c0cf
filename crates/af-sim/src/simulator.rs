//! The turn loop.

use af_core::{AgentId, RoomId};
use af_graph::{Path, RoomGraph};
use af_route::Assignment;
use tracing::{debug, trace};

use crate::{SimObserver, SimulationState};

// ── Move log types ────────────────────────────────────────────────────────────

/// One ant entering one room.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub agent: AgentId,
    pub room:  RoomId,
}

/// All moves made in one turn, in ascending agent order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub moves: Vec<Move>,
}

impl Turn {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// Advances assigned ants one room per turn until nobody can move.
///
/// Owns its [`SimulationState`]; paths and assignment are borrowed read-only.
/// With no paths there is nothing to walk and the first [`step`](Self::step)
/// returns `None`.
pub struct Simulator<'a> {
    paths:      &'a [Path],
    assignment: &'a Assignment,
    state:      SimulationState,
    turns:      usize,
    done:       bool,
}

impl<'a> Simulator<'a> {
    /// Place every ant of `assignment` in the start room.
    ///
    /// The start and end rooms are taken from the first selected path; all
    /// selected paths share them.
    pub fn new(graph: &RoomGraph, paths: &'a [Path], assignment: &'a Assignment) -> Self {
        let (start, end) = paths
            .first()
            .map_or((RoomId::INVALID, RoomId::INVALID), |p| (p.start(), p.end()));
        Self {
            paths,
            assignment,
            state: SimulationState::new(graph.room_count(), assignment.agent_count(), start, end),
            turns: 0,
            done:  paths.is_empty(),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Number of productive turns so far.
    pub fn turns_completed(&self) -> usize {
        self.turns
    }

    pub fn is_finished(&self) -> bool {
        self.done
    }

    /// Evaluate one turn.
    ///
    /// Returns `None`, and marks the simulation finished, when no ant can
    /// advance.
    pub fn step(&mut self) -> Option<Turn> {
        if self.done {
            return None;
        }

        let (paths, assignment) = (self.paths, self.assignment);
        let mut turn = Turn::default();
        for (agent, path_id) in assignment.iter() {
            let Some(path) = paths.get(path_id.index()) else {
                continue;
            };
            let pos = self.state.position(agent);
            let (Some(here), Some(next)) = (path.room_at(pos), path.room_at(pos + 1)) else {
                continue;
            };
            if !self.state.can_enter(next) {
                continue;
            }
            self.state.advance(agent, here, next);
            turn.moves.push(Move { agent, room: next });
        }

        if turn.is_empty() {
            self.done = true;
            return None;
        }
        self.turns += 1;
        trace!(turn = self.turns, moves = turn.moves.len(), "turn complete");
        Some(turn)
    }

    /// Step until finished, reporting each turn to `observer`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Vec<Turn> {
        let mut log = Vec::new();
        loop {
            let number = self.turns + 1;
            observer.on_turn_start(number);
            let Some(turn) = self.step() else {
                break;
            };
            observer.on_turn_end(number, &turn);
            log.push(turn);
        }
        observer.on_sim_end(self.turns);
        debug!(turns = self.turns, agents = self.assignment.agent_count(), "simulation finished");
        log
    }
}
