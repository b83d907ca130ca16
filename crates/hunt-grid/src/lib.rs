//! `hunt-grid` — the obstacle field and shortest-path search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`field`]  | `GridField`: bounds and the blocked-cell set          |
//! | [`router`] | `PathFinder` trait, `Path`, `AStarPathFinder`         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Propagates `Serialize`/`Deserialize` to `hunt-core`.    |

pub mod field;
pub mod router;


pub use field::GridField;
pub use router::{AStarPathFinder, Path, PathFinder};
