//! `af-sim` — turn loop and end-to-end pipeline for the antfarm router.
//!
//! # Pipeline
//!
//! ```text
//! RoomGraph ─▶ PathEnumerator ─▶ select ─▶ assign ─▶ Simulator ─▶ Vec<Turn>
//! ```
//!
//! [`Farm::solve`] runs every stage in order.  Each stage is also usable on
//! its own; [`Simulator`] can be stepped one turn at a time.
//!
//! # Turn rules
//!
//! ```text
//! for each turn:
//!   for agent in 0..agent_count:            ← fixed tie-break order
//!     next = room after the agent's current one on its path
//!     if next exists and has spare capacity:
//!       leave current room, enter next, record L<agent>-<next>
//!   stop once a turn records no move
//! ```
//!
//! Ordinary rooms hold one ant.  Start and end rooms are unbounded.  Updates
//! are visible immediately: a room vacated by ant 2 can be entered by ant 5
//! in the same turn, and a room entered by ant 2 blocks ant 5.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use af_core::FarmConfig;
//! use af_sim::{FarmBuilder, NoopObserver};
//!
//! let farm = FarmBuilder::new(FarmConfig::new(10), graph)
//!     .start("start")
//!     .end("end")
//!     .build()?;
//! let solution = farm.solve(&mut NoopObserver);
//! println!("{} turns", solution.turn_count());
//! ```

pub mod builder;
pub mod error;
pub mod farm;
pub mod observer;
pub mod simulator;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::FarmBuilder;
pub use error::{SimError, SimResult};
pub use farm::{Farm, Solution};
pub use observer::{NoopObserver, SimObserver};
pub use simulator::{Move, Simulator, Turn};
pub use state::{Capacity, SimulationState};
