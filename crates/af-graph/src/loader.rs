//! Colony text loader.
//!
//! # Format
//!
//! The classic lem-in description, one item per line:
//!
//! ```text
//! 3            ← number of ants (first non-comment line)
//! ##start      ← next room is the start room
//! A 0 0        ← room: name x y
//! B 1 0
//! ##end        ← next room is the end room
//! C 2 0
//! A-B          ← link: name-name
//! B-C
//! # anything   ← comment
//! ```
//!
//! Blank lines are skipped.  Room names may not begin with `L` or `#` (they
//! would be ambiguous in the move log and with comments) and may not contain
//! `-`.  Links may only reference rooms declared earlier in the file.

use std::io::{BufRead, BufReader, Read};

use af_core::{CoreError, Point};
use tracing::debug;

use crate::{GraphError, GraphResult, RoomGraph};

/// A fully parsed colony description: the graph plus run parameters.
#[derive(Debug, Clone)]
pub struct Colony {
    pub agent_count: usize,
    pub start:       String,
    pub end:         String,
    pub graph:       RoomGraph,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Marker {
    Start,
    End,
}

/// Load a colony from a file on disk.
pub fn load_colony_file(path: &std::path::Path) -> GraphResult<Colony> {
    let file = std::fs::File::open(path)?;
    load_colony_reader(file)
}

/// Like [`load_colony_file`] but accepts any `Read` source.
///
/// # Errors
///
/// - [`GraphError::Parse`] for malformed lines.
/// - [`GraphError::Core`] wrapping `InvalidAgentCount` if the ant count is
///   zero or negative.
/// - [`GraphError::InvalidEdge`] for self-links or links to unknown rooms.
/// - [`GraphError::EndpointsUndefined`] if `##start` or `##end` never
///   resolved to a room.
pub fn load_colony_reader<R: Read>(reader: R) -> GraphResult<Colony> {
    let mut graph       = RoomGraph::new();
    let mut agent_count = None;
    let mut start       = None;
    let mut end         = None;
    let mut pending     = None;

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line_no = i + 1;
        let line    = line?;
        let line    = line.trim();
        let parse_err = |message: String| GraphError::Parse { line: line_no, message };

        if line.is_empty() {
            continue;
        }

        // ── Commands and comments ─────────────────────────────────────────
        if let Some(rest) = line.strip_prefix('#') {
            let marker = match rest {
                "#start" => Marker::Start,
                "#end"   => Marker::End,
                _        => continue,
            };
            let already = match marker {
                Marker::Start => start.is_some(),
                Marker::End   => end.is_some(),
            };
            if already || pending.is_some() {
                return Err(parse_err(format!("unexpected `{line}`")));
            }
            pending = Some(marker);
            continue;
        }

        // ── Ant count ─────────────────────────────────────────────────────
        if agent_count.is_none() {
            let n: i64 = line
                .parse()
                .map_err(|_| parse_err(format!("expected number of ants, found `{line}`")))?;
            if n <= 0 {
                return Err(CoreError::InvalidAgentCount(n).into());
            }
            agent_count = Some(
                usize::try_from(n).map_err(|_| CoreError::InvalidAgentCount(n))?,
            );
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            // ── Room ──────────────────────────────────────────────────────
            [name, x, y] => {
                if name.starts_with('L') || name.contains('-') {
                    return Err(parse_err(format!("invalid room name `{name}`")));
                }
                let x = x.parse().map_err(|_| parse_err(format!("invalid x coordinate `{x}`")))?;
                let y = y.parse().map_err(|_| parse_err(format!("invalid y coordinate `{y}`")))?;
                graph.add_room(name, Point::new(x, y));
                match pending.take() {
                    Some(Marker::Start) => start = Some((*name).to_owned()),
                    Some(Marker::End)   => end = Some((*name).to_owned()),
                    None                => {}
                }
            }
            // ── Link ──────────────────────────────────────────────────────
            [link] if pending.is_none() => {
                let Some((a, b)) = link.split_once('-') else {
                    return Err(parse_err(format!("expected room or link, found `{line}`")));
                };
                graph.add_link(a, b)?;
            }
            _ => return Err(parse_err(format!("expected room or link, found `{line}`"))),
        }
    }

    let agent_count = agent_count
        .ok_or_else(|| GraphError::Parse { line: 0, message: "missing number of ants".into() })?;
    let (Some(start), Some(end)) = (start, end) else {
        return Err(GraphError::EndpointsUndefined);
    };

    debug!(
        rooms = graph.room_count(),
        links = graph.link_count(),
        agent_count,
        "loaded colony",
    );
    Ok(Colony { agent_count, start, end, graph })
}
