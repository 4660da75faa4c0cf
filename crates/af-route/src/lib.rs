//! `af-route` — choose which paths to use and who walks them.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`select`] | `select_disjoint` (greedy), `select_maximum` (exact), `select` |
//! | [`assign`] | `Assignment`, `assign`                                       |
//!
//! Neither stage can fail: an empty path list selects nothing and an empty
//! selection assigns nobody.  Input validation happens upstream.

pub mod assign;
pub mod select;


pub use assign::{Assignment, assign};
pub use select::{select, select_disjoint, select_maximum};
