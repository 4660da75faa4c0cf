//! The validated colony and its end-to-end solve.

use af_core::{FarmConfig, RoomId};
use af_graph::{DfsEnumerator, Path, PathEnumerator, RoomGraph};
use af_route::{Assignment, assign, select};
use tracing::debug;

use crate::{SimObserver, Simulator, Turn};

/// Everything one solve produced.
///
/// An empty `selected` set (no route from start to end) is a valid outcome:
/// `turns` is then empty and no ant moves.
#[derive(Debug, Clone, Default)]
pub struct Solution {
    /// Every start → end path, in discovery order.
    pub paths:      Vec<Path>,
    /// The pairwise interior-disjoint subset actually used.
    pub selected:   Vec<Path>,
    /// Path index (into `selected`) of each ant.
    pub assignment: Assignment,
    /// The move log, one entry per turn.
    pub turns:      Vec<Turn>,
}

impl Solution {
    /// The quantity the puzzle minimizes.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn move_count(&self) -> usize {
        self.turns.iter().map(|t| t.moves.len()).sum()
    }

    /// `true` if start and end are not connected.
    pub fn is_unroutable(&self) -> bool {
        self.selected.is_empty()
    }
}

/// A validated colony ready to solve.  Create via
/// [`FarmBuilder`][crate::FarmBuilder].
pub struct Farm<E: PathEnumerator = DfsEnumerator> {
    pub(crate) config:     FarmConfig,
    pub(crate) graph:      RoomGraph,
    pub(crate) start:      RoomId,
    pub(crate) end:        RoomId,
    pub(crate) enumerator: E,
}

impl<E: PathEnumerator> Farm<E> {
    pub fn config(&self) -> &FarmConfig {
        &self.config
    }

    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn end(&self) -> RoomId {
        self.end
    }

    /// Enumerate, select, assign, and simulate.
    ///
    /// Deterministic: the same farm always yields the same solution.
    pub fn solve<O: SimObserver>(&self, observer: &mut O) -> Solution {
        let paths      = self.enumerator.find_paths(&self.graph, self.start, self.end);
        let selected   = select(&paths, self.config.selection);
        let assignment = assign(self.config.agent_count, &selected, self.config.assignment);

        let turns = Simulator::new(&self.graph, &selected, &assignment).run(observer);

        debug!(
            paths    = paths.len(),
            selected = selected.len(),
            turns    = turns.len(),
            "solved colony",
        );
        Solution { paths, selected, assignment, turns }
    }
}
