//! Fluent builder for constructing a [`Farm`].

use af_core::{AssignPolicy, FarmConfig, RoomId, SearchLimits, SelectionStrategy};
use af_graph::{Colony, DfsEnumerator, PathEnumerator, RoomGraph};

use crate::{Farm, SimError, SimResult};

/// Fluent builder for [`Farm<E>`].
///
/// # Required inputs
///
/// - [`FarmConfig`]: ant count, selection strategy, assignment policy, limits
/// - [`RoomGraph`]: the colony
/// - `.start(name)` / `.end(name)`: both must name rooms in the graph
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                  |
/// |---------------------|------------------------------------------|
/// | `.enumerator(e)`    | `DfsEnumerator` with the config's limits |
/// | `.selection(s)`     | `config.selection`                       |
/// | `.assignment(p)`    | `config.assignment`                      |
///
/// # Example
///
/// ```rust,ignore
/// let farm = FarmBuilder::new(FarmConfig::new(3), graph)
///     .start("A")
///     .end("D")
///     .build()?;
/// ```
pub struct FarmBuilder<E: PathEnumerator = DfsEnumerator> {
    config:     FarmConfig,
    graph:      RoomGraph,
    start:      Option<String>,
    end:        Option<String>,
    enumerator: E,
}

impl FarmBuilder<DfsEnumerator> {
    /// Create a builder using depth-first enumeration bounded by
    /// `config.limits`.
    pub fn new(config: FarmConfig, graph: RoomGraph) -> Self {
        let enumerator = DfsEnumerator::new(config.limits);
        Self { config, graph, start: None, end: None, enumerator }
    }

    /// Seed a builder from a loaded colony: its ant count, graph, and
    /// endpoints, with default strategies.
    pub fn from_colony(colony: Colony) -> Self {
        Self::new(FarmConfig::new(colony.agent_count), colony.graph)
            .start(colony.start)
            .end(colony.end)
    }

    /// Replace the enumeration limits.
    pub fn limits(mut self, limits: SearchLimits) -> Self {
        self.config.limits = limits;
        self.enumerator    = DfsEnumerator::new(limits);
        self
    }
}

impl<E: PathEnumerator> FarmBuilder<E> {
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    pub fn end(mut self, name: impl Into<String>) -> Self {
        self.end = Some(name.into());
        self
    }

    pub fn selection(mut self, selection: SelectionStrategy) -> Self {
        self.config.selection = selection;
        self
    }

    pub fn assignment(mut self, assignment: AssignPolicy) -> Self {
        self.config.assignment = assignment;
        self
    }

    /// Swap in a different path source.
    pub fn enumerator<E2: PathEnumerator>(self, enumerator: E2) -> FarmBuilder<E2> {
        FarmBuilder {
            config: self.config,
            graph:  self.graph,
            start:  self.start,
            end:    self.end,
            enumerator,
        }
    }

    /// Validate inputs and return a ready-to-solve [`Farm`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Core`] wrapping `InvalidAgentCount` (or a bad limit)
    ///   from [`FarmConfig::validate`].
    /// - [`SimError::EndpointsUndefined`] if start or end is missing, empty,
    ///   or not a room of the graph.
    pub fn build(self) -> SimResult<Farm<E>> {
        self.config.validate()?;

        let start_name = self.start.unwrap_or_default();
        let end_name   = self.end.unwrap_or_default();
        let resolve = |name: &str| -> Option<RoomId> {
            if name.is_empty() { None } else { self.graph.room_id(name) }
        };
        let (Some(start), Some(end)) = (resolve(&start_name), resolve(&end_name)) else {
            return Err(SimError::EndpointsUndefined { start: start_name, end: end_name });
        };

        Ok(Farm {
            config:     self.config,
            graph:      self.graph,
            start,
            end,
            enumerator: self.enumerator,
        })
    }
}
