//! `af-output` — move-log formatting and writers for the antfarm router.
//!
//! Two backends are provided:
//!
//! | Writer       | Output                                                   |
//! |--------------|----------------------------------------------------------|
//! | `TextWriter` | one line per turn: `L1-B L2-C` (any `io::Write`)         |
//! | `CsvWriter`  | `moves.csv` with `turn,agent,room` rows                  |
//!
//! Both implement [`OutputWriter`] and are driven by [`MoveLogObserver`],
//! which implements `af_sim::SimObserver`.  The [`format`] helpers render
//! the same text without a writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use af_output::{MoveLogObserver, TextWriter};
//!
//! let mut obs = MoveLogObserver::new(TextWriter::new(std::io::stdout()), farm.graph());
//! let solution = farm.solve(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod format;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use format::{format_move, format_path, format_turn, format_turns};
pub use observer::MoveLogObserver;
pub use row::MoveRow;
pub use text::TextWriter;
pub use writer::OutputWriter;
