//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `HuntError` as one
//! variant via `From`.

use thiserror::Error;

/// Startup errors raised while validating a configuration or grid.
///
/// Nothing in the tick loop produces these: a missing path or a rejected
/// obstacle move is a normal outcome, not an error.
#[derive(Debug, Error)]
pub enum HuntError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: u32, cols: u32 },

    #[error("grid of {cells} cells cannot hold the agent and {goals} goals")]
    GridTooSmall { cells: u64, goals: usize },

    #[error("grid of {cells} cells exceeds the limit of {max}")]
    GridTooLarge { cells: u64, max: u64 },
}

/// Shorthand result type for all `hunt-*` crates.
pub type HuntResult<T> = Result<T, HuntError>;
