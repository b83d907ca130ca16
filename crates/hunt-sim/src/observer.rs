//! Simulation observer trait for rendering, pacing and progress reporting.

use hunt_core::{Cell, Tick};

use crate::{Frame, RunSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — quit after a fixed number of ticks
///
/// ```rust,ignore
/// struct StopAfter(u64);
///
/// impl SimObserver for StopAfter {
///     fn quit_requested(&mut self, tick: Tick) -> bool {
///         tick.0 >= self.0
///     }
/// }
/// ```
pub trait SimObserver {
    /// Checked before every tick.  Returning `true` ends the run with
    /// [`RunEnd::Quit`][crate::RunEnd::Quit]; an in-progress tick is never
    /// interrupted.
    fn quit_requested(&mut self, _tick: Tick) -> bool {
        false
    }

    /// Called at the start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when the agent captures a goal.  `score` is the new score.
    fn on_capture(&mut self, _tick: Tick, _goal: Cell, _score: u32) {}

    /// Called after each tick with a snapshot of the world.
    fn on_tick_end(&mut self, _frame: &Frame) {}

    /// Called once when the run ends, for whatever reason.
    fn on_finish(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
