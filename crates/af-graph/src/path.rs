//! Simple paths through the room graph.

use af_core::RoomId;

use crate::RoomGraph;

/// An ordered sequence of rooms from start to end with no repeated room.
///
/// A direct start–end link yields a two-room path with an empty interior.
/// Produced by a [`PathEnumerator`](crate::PathEnumerator); read-only after.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    rooms: Vec<RoomId>,
}

impl Path {
    pub fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms }
    }

    #[inline]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Number of rooms, start and end included.
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of links traversed (moves an ant makes along this path).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    /// First room, or `RoomId::INVALID` for an empty path.
    pub fn start(&self) -> RoomId {
        self.rooms.first().copied().unwrap_or(RoomId::INVALID)
    }

    /// Last room, or `RoomId::INVALID` for an empty path.
    pub fn end(&self) -> RoomId {
        self.rooms.last().copied().unwrap_or(RoomId::INVALID)
    }

    /// Room at `step` (0 = start), if the path is that long.
    #[inline]
    pub fn room_at(&self, step: usize) -> Option<RoomId> {
        self.rooms.get(step).copied()
    }

    /// All rooms except the first and last.
    pub fn interior(&self) -> &[RoomId] {
        if self.rooms.len() <= 2 {
            return &[];
        }
        &self.rooms[1..self.rooms.len() - 1]
    }

    /// `true` if the two paths share no interior room.
    ///
    /// Start and end are excluded: every path begins and ends there.
    pub fn is_disjoint(&self, other: &Path) -> bool {
        let theirs = other.interior();
        !self.interior().iter().any(|r| theirs.contains(r))
    }

    /// Sum of Euclidean distances between consecutive room coordinates.
    ///
    /// Diagnostic only; selection and scheduling count rooms, not distance.
    pub fn distance(&self, graph: &RoomGraph) -> f64 {
        self.rooms
            .windows(2)
            .filter_map(|w| Some((graph.room(w[0])?.pos, graph.room(w[1])?.pos)))
            .map(|(a, b)| a.distance(b))
            .sum()
    }

    /// Room names in path order.
    pub fn names<'g>(&'g self, graph: &'g RoomGraph) -> impl Iterator<Item = &'g str> + 'g {
        self.rooms.iter().map(move |&r| graph.name(r))
    }
}
