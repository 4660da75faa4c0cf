//! Undirected room graph.
//!
//! # Data layout
//!
//! Rooms are stored in a `Vec` indexed by `RoomId` in insertion order, with a
//! name → `RoomId` index on the side.  Each room keeps its neighbour list in
//! link-insertion order.  That order is significant: path enumeration walks
//! neighbours in exactly this order, and greedy path selection depends on the
//! resulting discovery order.
//!
//! The adjacency relation is symmetric at all times.  `add_link` is the only
//! way to create an edge and always records both directions.

use af_core::{Point, RoomId};

use crate::{EdgeFault, GraphError, GraphResult};

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, RoomId>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<String, RoomId>;

// ── Room ──────────────────────────────────────────────────────────────────────

/// A named room with its coordinates and neighbour set.
///
/// Immutable once created except for its neighbour list, which only
/// [`RoomGraph::add_link`] extends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub pos:  Point,
    neighbors: Vec<RoomId>,
}

impl Room {
    /// Neighbours in link-insertion order.
    #[inline]
    pub fn neighbors(&self) -> &[RoomId] {
        &self.neighbors
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

// ── RoomGraph ─────────────────────────────────────────────────────────────────

/// The colony: rooms keyed by unique name, joined by undirected links.
///
/// # Example
///
/// ```
/// use af_core::Point;
/// use af_graph::RoomGraph;
///
/// let mut g = RoomGraph::new();
/// let a = g.add_room("A", Point::new(0, 0));
/// let b = g.add_room("B", Point::new(1, 0));
/// g.add_link("A", "B").unwrap();
/// assert!(g.has_link(a, b) && g.has_link(b, a));
/// assert!(g.add_link("A", "A").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    index: NameIndex,
    links: usize,
}

impl RoomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of rooms.
    pub fn with_capacity(rooms: usize) -> Self {
        let mut index = NameIndex::default();
        index.reserve(rooms);
        Self { rooms: Vec::with_capacity(rooms), index, links: 0 }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Register a room and return its id.
    ///
    /// Idempotent: if `name` already exists the existing id is returned and
    /// `pos` is ignored.  Once the 32-bit id space is exhausted nothing is
    /// registered and `RoomId::INVALID` is returned.
    pub fn add_room(&mut self, name: &str, pos: Point) -> RoomId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = RoomId::from_index(self.rooms.len());
        if !id.is_valid() {
            return id;
        }
        self.rooms.push(Room { name: name.to_owned(), pos, neighbors: Vec::new() });
        self.index.insert(name.to_owned(), id);
        id
    }

    /// Link two rooms by name.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidEdge`] if `a == b` or either room is unknown.
    /// The graph is left unchanged on error.
    pub fn add_link(&mut self, a: &str, b: &str) -> GraphResult<()> {
        let invalid = |fault| GraphError::InvalidEdge {
            from: a.to_owned(),
            to:   b.to_owned(),
            fault,
        };
        if a == b {
            return Err(invalid(EdgeFault::SelfLink));
        }
        let ra = self.room_id(a).ok_or_else(|| invalid(EdgeFault::UnknownRoom(a.to_owned())))?;
        let rb = self.room_id(b).ok_or_else(|| invalid(EdgeFault::UnknownRoom(b.to_owned())))?;
        self.link_ids(ra, rb);
        Ok(())
    }

    /// Link two rooms by id.  Same contract as [`add_link`](Self::add_link).
    pub fn add_link_ids(&mut self, a: RoomId, b: RoomId) -> GraphResult<()> {
        let (Some(ra), Some(rb)) = (self.room(a), self.room(b)) else {
            let missing = if self.room(a).is_none() { a } else { b };
            return Err(GraphError::InvalidEdge {
                from:  a.to_string(),
                to:    b.to_string(),
                fault: EdgeFault::UnknownRoom(missing.to_string()),
            });
        };
        if a == b {
            return Err(GraphError::InvalidEdge {
                from:  ra.name.clone(),
                to:    rb.name.clone(),
                fault: EdgeFault::SelfLink,
            });
        }
        self.link_ids(a, b);
        Ok(())
    }

    /// Duplicate links are accepted but recorded once.
    fn link_ids(&mut self, a: RoomId, b: RoomId) {
        if self.rooms[a.index()].neighbors.contains(&b) {
            return;
        }
        self.rooms[a.index()].neighbors.push(b);
        self.rooms[b.index()].neighbors.push(a);
        self.links += 1;
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// Name of `id`, or `"?"` for an id this graph never issued.
    pub fn name(&self, id: RoomId) -> &str {
        self.room(id).map_or("?", |r| r.name.as_str())
    }

    /// Neighbours of `id` in link-insertion order; empty for unknown ids.
    #[inline]
    pub fn neighbors(&self, id: RoomId) -> &[RoomId] {
        self.room(id).map(Room::neighbors).unwrap_or_default()
    }

    pub fn has_link(&self, a: RoomId, b: RoomId) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId::from_index(i), r))
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of distinct undirected links.
    pub fn link_count(&self) -> usize {
        self.links
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
