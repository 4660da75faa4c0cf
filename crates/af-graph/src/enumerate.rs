//! Exhaustive simple-path enumeration.
//!
//! # Discovery order
//!
//! [`DfsEnumerator`] reproduces a recursive depth-first search exactly:
//! neighbours are tried in link-insertion order and a path is emitted the
//! moment the end room is reached.  The end room is treated as a leaf and is
//! never expanded.  Greedy selection downstream is order-sensitive, so this
//! order is part of the contract.
//!
//! The search runs on an explicit frame stack, so depth is bounded only by
//! memory, never by the call stack.  On dense graphs the number of simple
//! paths grows exponentially; [`SearchLimits`] caps the work.

use af_core::{RoomId, SearchLimits};
use tracing::{debug, warn};

use crate::{Path, RoomGraph};

// ── PathEnumerator trait ──────────────────────────────────────────────────────

/// Pluggable start → end path source.
pub trait PathEnumerator {
    /// Every simple path from `start` to `end`, in discovery order.
    ///
    /// Returns an empty `Vec` if either room is unknown to `graph` or no
    /// route exists.  That is not an error.
    fn find_paths(&self, graph: &RoomGraph, start: RoomId, end: RoomId) -> Vec<Path>;
}

// ── DfsEnumerator ─────────────────────────────────────────────────────────────

/// Depth-first enumeration of all simple paths.
#[derive(Copy, Clone, Debug, Default)]
pub struct DfsEnumerator {
    pub limits: SearchLimits,
}

impl DfsEnumerator {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

/// One level of the explicit DFS stack: a room on the current path and the
/// index of the next neighbour to try.
struct Frame {
    room: RoomId,
    next: usize,
}

impl PathEnumerator for DfsEnumerator {
    fn find_paths(&self, graph: &RoomGraph, start: RoomId, end: RoomId) -> Vec<Path> {
        let mut found = Vec::new();
        if graph.room(start).is_none() || graph.room(end).is_none() {
            return found;
        }
        if start == end {
            found.push(Path::new(vec![start]));
            return found;
        }

        let max_paths = self.limits.max_paths.unwrap_or(usize::MAX);
        let max_rooms = self.limits.max_rooms.unwrap_or(usize::MAX);

        let mut visited = vec![false; graph.room_count()];
        let mut current = vec![start];
        let mut stack   = vec![Frame { room: start, next: 0 }];
        visited[start.index()] = true;

        while let Some(frame) = stack.last_mut() {
            let neighbors = graph.neighbors(frame.room);
            let Some(&next) = neighbors.get(frame.next) else {
                // Exhausted: backtrack.
                visited[frame.room.index()] = false;
                stack.pop();
                current.pop();
                continue;
            };
            frame.next += 1;

            if visited[next.index()] || current.len() >= max_rooms {
                continue;
            }

            if next == end {
                current.push(end);
                found.push(Path::new(current.clone()));
                current.pop();
                if found.len() >= max_paths {
                    warn!(max_paths, "path enumeration truncated");
                    break;
                }
                continue;
            }

            visited[next.index()] = true;
            current.push(next);
            stack.push(Frame { room: next, next: 0 });
        }

        debug!(
            start = graph.name(start),
            end = graph.name(end),
            paths = found.len(),
            "enumerated paths",
        );
        found
    }
}

// ── Convenience ───────────────────────────────────────────────────────────────

/// Every simple path between two rooms named `start` and `end`, unbounded.
///
/// Unknown names yield an empty result; callers that need a hard failure
/// must check the endpoints themselves.
pub fn find_all_paths(graph: &RoomGraph, start: &str, end: &str) -> Vec<Path> {
    match (graph.room_id(start), graph.room_id(end)) {
        (Some(s), Some(e)) => DfsEnumerator::default().find_paths(graph, s, e),
        _ => Vec::new(),
    }
}
