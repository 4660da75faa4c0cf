//! `MoveLogObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use af_graph::RoomGraph;
use af_sim::{SimObserver, Turn};

use crate::row::MoveRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams each turn to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the solve returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct MoveLogObserver<'g, W: OutputWriter> {
    writer:     W,
    graph:      &'g RoomGraph,
    last_error: Option<OutputError>,
}

impl<'g, W: OutputWriter> MoveLogObserver<'g, W> {
    /// `graph` resolves room ids to names.
    pub fn new(writer: W, graph: &'g RoomGraph) -> Self {
        Self { writer, graph, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect its buffer after the solve).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for MoveLogObserver<'_, W> {
    fn on_turn_end(&mut self, number: usize, turn: &Turn) {
        let rows: Vec<MoveRow<'_>> = turn
            .moves
            .iter()
            .map(|m| MoveRow {
                turn:  number as u64,
                agent: m.agent.number(),
                room:  self.graph.name(m.room),
            })
            .collect();
        let result = self.writer.write_turn(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _total_turns: usize) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
