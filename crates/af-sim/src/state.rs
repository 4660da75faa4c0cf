//! Mutable per-run state: ant positions and room occupancy.

use af_core::{AgentId, RoomId};

/// How many ants a room may hold at once.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Capacity {
    Limited(u32),
    Unbounded,
}

impl Capacity {
    /// Ordinary rooms.
    pub const ROOM: Capacity = Capacity::Limited(1);

    #[inline]
    pub fn admits(self, occupants: u32) -> bool {
        match self {
            Capacity::Limited(n) => occupants < n,
            Capacity::Unbounded  => true,
        }
    }
}

/// Ant positions and room occupancy for one simulation run.
///
/// `positions[agent]` is the step index along the agent's path (0 = start).
/// `occupants` and `capacity` are indexed by `RoomId`.  Every ant starts in
/// the start room, which is therefore counted as holding all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    positions: Vec<usize>,
    occupants: Vec<u32>,
    capacity:  Vec<Capacity>,
}

impl SimulationState {
    /// Fresh state for `agent_count` ants at `start` in a colony of
    /// `room_count` rooms.  `start` and `end` are unbounded.
    pub fn new(room_count: usize, agent_count: usize, start: RoomId, end: RoomId) -> Self {
        let mut capacity  = vec![Capacity::ROOM; room_count];
        let mut occupants = vec![0; room_count];
        for room in [start, end] {
            if let Some(c) = capacity.get_mut(room.index()) {
                *c = Capacity::Unbounded;
            }
        }
        if let Some(n) = occupants.get_mut(start.index()) {
            *n = u32::try_from(agent_count).unwrap_or(u32::MAX);
        }
        Self { positions: vec![0; agent_count], occupants, capacity }
    }

    /// Step index of `agent` along its path.
    #[inline]
    pub fn position(&self, agent: AgentId) -> usize {
        self.positions.get(agent.index()).copied().unwrap_or(0)
    }

    /// Number of ants currently in `room`.
    #[inline]
    pub fn occupants(&self, room: RoomId) -> u32 {
        self.occupants.get(room.index()).copied().unwrap_or(0)
    }

    pub fn capacity(&self, room: RoomId) -> Capacity {
        self.capacity.get(room.index()).copied().unwrap_or(Capacity::ROOM)
    }

    /// `true` if one more ant fits in `room` right now.
    #[inline]
    pub fn can_enter(&self, room: RoomId) -> bool {
        self.capacity(room).admits(self.occupants(room))
    }

    /// Move `agent` one step from `from` into `to`.
    ///
    /// The caller must have checked [`can_enter`](Self::can_enter).
    pub fn advance(&mut self, agent: AgentId, from: RoomId, to: RoomId) {
        if let Some(n) = self.occupants.get_mut(from.index()) {
            *n = n.saturating_sub(1);
        }
        if let Some(n) = self.occupants.get_mut(to.index()) {
            *n += 1;
        }
        if let Some(p) = self.positions.get_mut(agent.index()) {
            *p += 1;
        }
    }

    pub fn agent_count(&self) -> usize {
        self.positions.len()
    }
}
