//! `af-graph` — room graph, path enumeration, and colony loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`graph`]     | `RoomGraph`, `Room`: undirected room network               |
//! | [`path`]      | `Path`: an ordered simple path of rooms                    |
//! | [`enumerate`] | `PathEnumerator` trait, `DfsEnumerator`, `find_all_paths`  |
//! | [`loader`]    | `load_colony_reader`, `load_colony_file`, `Colony`         |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the room-name index instead of SipHash.         |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.         |

pub mod enumerate;
pub mod error;
pub mod graph;
pub mod loader;
pub mod path;


pub use enumerate::{DfsEnumerator, PathEnumerator, find_all_paths};
pub use error::{EdgeFault, GraphError, GraphResult};
pub use graph::{Room, RoomGraph};
pub use loader::{Colony, load_colony_file, load_colony_reader};
pub use path::Path;
