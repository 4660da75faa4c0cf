//! Ant-to-path assignment.
//!
//! # Algorithm
//!
//! 1. **Baseline.**  Ant `i` takes path `i mod n`.  Under
//!    [`AssignPolicy::ShortestFirst`] ant 0 is instead pinned to the shortest
//!    path (first one on ties) and ants `1..` continue round-robin.
//! 2. **Repair.**  Every path left with no ants takes one from the first ant
//!    (in index order) whose path currently holds more than one.  A pinned
//!    ant 0 is never moved.
//!
//! The result balances ants by count, not by travel time.  When there are at
//! least as many ants as paths every path carries at least one ant; with
//! fewer ants some paths stay unused.

use af_core::{AgentId, AssignPolicy, PathId};
use af_graph::Path;
use tracing::debug;

/// Which selected path each ant walks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Path of each ant, indexed by `AgentId`.
    paths: Vec<PathId>,
    /// Number of ants on each path, indexed by `PathId`.
    loads: Vec<usize>,
}

impl Assignment {
    /// Build an assignment from an explicit per-ant path list.
    ///
    /// Returns `None` if any entry is not below `path_count`.
    pub fn from_paths(paths: Vec<PathId>, path_count: usize) -> Option<Self> {
        let mut loads = vec![0; path_count];
        for p in &paths {
            *loads.get_mut(p.index())? += 1;
        }
        Some(Self { paths, loads })
    }

    pub fn agent_count(&self) -> usize {
        self.paths.len()
    }

    pub fn path_count(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The path assigned to `agent`, if it exists.
    #[inline]
    pub fn path_of(&self, agent: AgentId) -> Option<PathId> {
        self.paths.get(agent.index()).copied()
    }

    /// Ants per path, indexed by `PathId`.  Always sums to `agent_count()`.
    pub fn loads(&self) -> &[usize] {
        &self.loads
    }

    /// `(agent, path)` pairs in ascending agent order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, PathId)> + '_ {
        self.paths.iter().enumerate().map(|(i, &p)| (AgentId::from_index(i), p))
    }

    /// Paths that ended up with no ants.
    pub fn unused_paths(&self) -> impl Iterator<Item = PathId> + '_ {
        self.loads
            .iter()
            .enumerate()
            .filter(|&(_, &load)| load == 0)
            .map(|(i, _)| PathId::from_index(i))
    }

    fn reassign(&mut self, agent: usize, to: usize) {
        let from = self.paths[agent].index();
        self.loads[from] -= 1;
        self.loads[to]   += 1;
        self.paths[agent] = PathId::from_index(to);
    }
}

/// Index of the path with the fewest rooms; the first wins ties.
fn shortest(paths: &[Path]) -> usize {
    paths
        .iter()
        .enumerate()
        .min_by_key(|(i, p)| (p.len(), *i))
        .map_or(0, |(i, _)| i)
}

/// Distribute `agent_count` ants over `paths`.
///
/// Returns an empty assignment when `paths` is empty.
pub fn assign(agent_count: usize, paths: &[Path], policy: AssignPolicy) -> Assignment {
    let n = paths.len();
    if n == 0 {
        return Assignment::default();
    }

    let mut out = Assignment {
        paths: Vec::with_capacity(agent_count),
        loads: vec![0; n],
    };

    // ── Baseline round-robin ──────────────────────────────────────────────
    for i in 0..agent_count {
        let p = match policy {
            AssignPolicy::ShortestFirst if i == 0 => shortest(paths),
            _ => i % n,
        };
        out.paths.push(PathId::from_index(p));
        out.loads[p] += 1;
    }

    // ── Repair: no selected path left empty if ants allow ─────────────────
    let first_movable = match policy {
        AssignPolicy::ShortestFirst => 1,
        AssignPolicy::RoundRobin    => 0,
    };
    for empty in 0..n {
        if out.loads[empty] != 0 {
            continue;
        }
        let donor = (first_movable..agent_count)
            .find(|&a| out.loads[out.paths[a].index()] > 1);
        if let Some(agent) = donor {
            out.reassign(agent, empty);
        }
    }

    debug!(agent_count, loads = ?out.loads, %policy, "assigned ants");
    out
}
