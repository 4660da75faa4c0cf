//! CSV move-log backend.
//!
//! Creates `moves.csv` in the configured output directory with one
//! `turn,agent,room` row per move.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::{MoveRow, OutputResult};
use crate::writer::OutputWriter;

pub const MOVES_FILE: &str = "moves.csv";

/// Writes the move log as CSV rows.
pub struct CsvWriter<W: Write = File> {
    moves:    Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Open (or create) `moves.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::with_writer(Writer::from_path(dir.join(MOVES_FILE))?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Write CSV to an arbitrary sink.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        Self::with_writer(Writer::from_writer(out))
    }

    fn with_writer(mut moves: Writer<W>) -> OutputResult<Self> {
        moves.write_record(["turn", "agent", "room"])?;
        Ok(Self { moves, finished: false })
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_turn(&mut self, moves: &[MoveRow<'_>]) -> OutputResult<()> {
        for row in moves {
            self.moves.write_record([
                row.turn.to_string().as_str(),
                row.agent.to_string().as_str(),
                row.room,
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        Ok(())
    }
}
