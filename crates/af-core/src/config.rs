//! Colony-wide configuration.
//!
//! # Design
//!
//! `FarmConfig` gathers every knob the routing pipeline reads: how many ants
//! to move, which path selection strategy to use, how to spread ants over
//! the selected paths, and the limits that bound path enumeration.  Defaults:
//! greedy selection in discovery order, first ant pinned to the shortest
//! path, unlimited search.

use crate::{CoreError, CoreResult};

// ── SelectionStrategy ─────────────────────────────────────────────────────────

/// How a set of pairwise interior-disjoint paths is chosen from all paths.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionStrategy {
    /// Single pass in discovery order; each accepted path excludes every
    /// later path it overlaps.  Order-dependent, not guaranteed maximum.
    #[default]
    Greedy,
    /// Exhaustive search for a maximum-cardinality disjoint subset.
    /// Exponential in the number of paths; pair it with
    /// [`SearchLimits::max_paths`] on dense colonies.
    Maximum,
}

impl SelectionStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionStrategy::Greedy  => "greedy",
            SelectionStrategy::Maximum => "maximum",
        }
    }
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SelectionStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "greedy"  => Ok(SelectionStrategy::Greedy),
            "maximum" => Ok(SelectionStrategy::Maximum),
            other     => Err(CoreError::Config(format!("unknown selection strategy `{other}`"))),
        }
    }
}

// ── AssignPolicy ──────────────────────────────────────────────────────────────

/// How ants are distributed over the selected paths before the repair pass.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssignPolicy {
    /// Ant 0 takes the shortest path; ant `i > 0` takes path `i mod n`.
    #[default]
    ShortestFirst,
    /// Ant `i` takes path `i mod n`.
    RoundRobin,
}

impl AssignPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignPolicy::ShortestFirst => "shortest-first",
            AssignPolicy::RoundRobin    => "round-robin",
        }
    }
}

impl std::fmt::Display for AssignPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssignPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "shortest-first" => Ok(AssignPolicy::ShortestFirst),
            "round-robin"    => Ok(AssignPolicy::RoundRobin),
            other            => Err(CoreError::Config(format!("unknown assignment policy `{other}`"))),
        }
    }
}

// ── SearchLimits ──────────────────────────────────────────────────────────────

/// Bounds on exhaustive path enumeration.
///
/// Enumeration is exponential on dense graphs.  `None` means unbounded; the
/// search is stack-safe either way because it never recurses.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Stop after this many paths have been collected.
    pub max_paths: Option<usize>,
    /// Ignore paths with more than this many rooms (start and end included).
    pub max_rooms: Option<usize>,
}

impl SearchLimits {
    pub const UNBOUNDED: SearchLimits = SearchLimits { max_paths: None, max_rooms: None };
}

// ── FarmConfig ────────────────────────────────────────────────────────────────

/// Top-level routing configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FarmConfig {
    /// Number of ants to move from start to end.  Must be at least 1.
    pub agent_count: usize,

    pub selection: SelectionStrategy,

    pub assignment: AssignPolicy,

    pub limits: SearchLimits,
}

impl FarmConfig {
    /// Default configuration for `agent_count` ants.
    pub fn new(agent_count: usize) -> Self {
        Self {
            agent_count,
            selection:  SelectionStrategy::default(),
            assignment: AssignPolicy::default(),
            limits:     SearchLimits::default(),
        }
    }

    pub fn with_selection(mut self, selection: SelectionStrategy) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_assignment(mut self, assignment: AssignPolicy) -> Self {
        self.assignment = assignment;
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Reject configurations the pipeline cannot run.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidAgentCount`] when `agent_count` is zero or does
    /// not fit the 32-bit agent id space.  [`CoreError::Config`] when a
    /// search limit is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.agent_count == 0 || u32::try_from(self.agent_count).is_err() {
            return Err(CoreError::InvalidAgentCount(
                i64::try_from(self.agent_count).unwrap_or(i64::MAX),
            ));
        }
        if self.limits.max_paths == Some(0) {
            return Err(CoreError::Config("max_paths must be at least 1".into()));
        }
        if matches!(self.limits.max_rooms, Some(n) if n < 2) {
            return Err(CoreError::Config("max_rooms must be at least 2".into()));
        }
        Ok(())
    }
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
