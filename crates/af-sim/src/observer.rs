//! Simulation observer trait for progress reporting and move-log output.

use crate::Turn;

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Turn numbers are 1-based.
///
/// # Example: line printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_turn_end(&mut self, number: usize, turn: &Turn) {
///         println!("turn {number}: {} moves", turn.moves.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before turn `number` is evaluated, including the final one
    /// that finds nothing left to move.
    fn on_turn_start(&mut self, _number: usize) {}

    /// Called after turn `number` recorded at least one move.
    fn on_turn_end(&mut self, _number: usize, _turn: &Turn) {}

    /// Called once after the last productive turn.  `total_turns` is zero if
    /// nothing moved.
    fn on_sim_end(&mut self, _total_turns: usize) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
