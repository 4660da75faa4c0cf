//! Text rendering of paths and move logs.
//!
//! A move is written `L<n>-<room>` with `n` the 1-based ant number.  Moves
//! within a turn are space-separated in ant order; turns are
//! newline-separated.

use af_graph::{Path, RoomGraph};
use af_sim::{Move, Turn};

pub fn format_move(m: &Move, graph: &RoomGraph) -> String {
    format!("L{}-{}", m.agent.number(), graph.name(m.room))
}

pub fn format_turn(turn: &Turn, graph: &RoomGraph) -> String {
    turn.moves
        .iter()
        .map(|m| format_move(m, graph))
        .collect::<Vec<_>>()
        .join(" ")
}

/// All turns, one per line, without a trailing newline.
pub fn format_turns(turns: &[Turn], graph: &RoomGraph) -> String {
    turns
        .iter()
        .map(|t| format_turn(t, graph))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `A -> B -> C`, for diagnostic listings of enumerated or selected paths.
pub fn format_path(path: &Path, graph: &RoomGraph) -> String {
    path.names(graph).collect::<Vec<_>>().join(" -> ")
}
