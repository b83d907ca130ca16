//! Read-only views handed to renderers and observers.
//!
//! Everything here is an owned copy: holding a `Frame` never borrows the
//! simulation, and nothing a renderer does to it can reach back into core
//! state.

use std::fmt;
use std::time::Duration;

use hunt_core::{Cell, Tick};

/// Lifecycle of a run.  `Won` and `Timeout` are terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimState {
    #[default]
    Running,
    /// Every goal was captured.
    Won,
    /// The time budget ran out with goals remaining.
    Timeout,
}

impl SimState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, SimState::Running)
    }
}

impl fmt::Display for SimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SimState::Running => "running",
            SimState::Won     => "won",
            SimState::Timeout => "timeout",
        })
    }
}

/// Snapshot of the world after a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Ticks completed so far.
    pub tick:      Tick,
    pub state:     SimState,
    pub agent:     Cell,
    /// Blocked cells in row-major order.
    pub obstacles: Vec<Cell>,
    /// Remaining goals in row-major order.
    pub goals:     Vec<Cell>,
    pub score:     u32,
    pub elapsed:   Duration,
}

/// Why [`Sim::run`][crate::Sim::run] returned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunEnd {
    Won,
    Timeout,
    /// The observer asked to stop at a tick boundary.
    Quit,
}

impl fmt::Display for RunEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunEnd::Won     => "won",
            RunEnd::Timeout => "timeout",
            RunEnd::Quit    => "quit",
        })
    }
}

/// Outcome of a run, for the final message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub end:             RunEnd,
    pub score:           u32,
    pub ticks:           Tick,
    pub elapsed:         Duration,
    pub goals_remaining: usize,
}
