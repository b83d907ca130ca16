use hunt_core::{Cell, HuntError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] HuntError),

    #[error("{what} {cell} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        what: &'static str,
        cell: Cell,
        rows: u32,
        cols: u32,
    },

    #[error("goal {0} coincides with the agent's start")]
    GoalOnAgent(Cell),

    #[error("goal {0} listed more than once")]
    DuplicateGoal(Cell),
}

pub type SimResult<T> = Result<T, SimError>;
