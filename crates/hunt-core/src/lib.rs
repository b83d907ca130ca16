//! `hunt-core` — foundational types for the grid hunt simulation.
//!
//! Every other `hunt-*` crate depends on this one.  It has no `hunt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`cell`]   | `Cell`, Manhattan distance, 4-connected offsets          |
//! | [`time`]   | `Tick`, `SimulationClock`, `TimeSource` implementations  |
//! | [`rng`]    | `RandomSource` trait, seeded `SimRng`                    |
//! | [`config`] | `GameConfig`, `RelocationPolicy`                         |
//! | [`error`]  | `HuntError`, `HuntResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod cell;
pub mod config;
pub mod error;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::{GameConfig, MAX_CELLS, RelocationPolicy};
pub use error::{HuntError, HuntResult};
pub use rng::{RandomSource, SimRng};
pub use time::{SimulationClock, Tick, TickTime, TimeSource, WallTime};
