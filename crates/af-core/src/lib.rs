//! `af-core` — foundational types for the `antfarm` colony router.
//!
//! This crate is a dependency of every other `af-*` crate.  It has no `af-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `RoomId`, `PathId`                            |
//! | [`point`]   | `Point`: integer room coordinates                        |
//! | [`config`]  | `FarmConfig`, `SelectionStrategy`, `AssignPolicy`, …     |
//! | [`error`]   | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod point;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AssignPolicy, FarmConfig, SearchLimits, SelectionStrategy};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, PathId, RoomId};
pub use point::Point;
