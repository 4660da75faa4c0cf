//! The `OutputWriter` trait implemented by all backend writers.

use crate::{MoveRow, OutputResult};

/// Trait implemented by the text and CSV writers.
///
/// Errors are stored by [`MoveLogObserver`](crate::MoveLogObserver) and
/// retrieved with `take_error`.
pub trait OutputWriter {
    /// Write every move of one turn, in ant order.  `moves` is never empty
    /// and every row carries the same turn number.
    fn write_turn(&mut self, moves: &[MoveRow<'_>]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
