//! Simulation time model.
//!
//! # Design
//!
//! Progress is counted in `Tick`s, one per completed simulation step.  The
//! time budget is measured separately by a [`TimeSource`]:
//!
//! - [`WallTime`] reads a monotonic `Instant`.  This is the interactive mode,
//!   where the budget is real seconds no matter how fast ticks are driven.
//! - [`TickTime`] derives elapsed time from the tick count:
//!
//!   elapsed = ticks * tick_duration
//!
//!   which makes timeouts exact and reproducible in tests and headless runs.
//!
//! [`SimulationClock`] pairs a source with the limit and answers whether the
//! run has expired.

use std::fmt;
use std::time::{Duration, Instant};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of completed simulation ticks.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Time sources ──────────────────────────────────────────────────────────────

/// Where elapsed time comes from.
pub trait TimeSource {
    /// Time elapsed since the source was started.
    fn elapsed(&self) -> Duration;

    /// Notified once per completed tick.  Wall-clock sources ignore it.
    fn on_tick(&mut self) {}

    /// Restart measurement from zero.  Called when the sim is built, so
    /// setup time is not charged to the run.
    fn restart(&mut self) {}
}

/// Real elapsed time from a monotonic clock.
#[derive(Clone, Debug)]
pub struct WallTime {
    started: Instant,
}

impl WallTime {
    /// Start measuring now.
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }
}

impl Default for WallTime {
    fn default() -> Self {
        Self::start()
    }
}

impl TimeSource for WallTime {
    #[inline]
    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn restart(&mut self) {
        self.started = Instant::now();
    }
}

/// Simulated time: every tick is worth exactly `tick_duration`.
#[derive(Clone, Debug)]
pub struct TickTime {
    tick_duration: Duration,
    ticks:         u32,
}

impl TickTime {
    pub fn new(tick_duration: Duration) -> Self {
        Self { tick_duration, ticks: 0 }
    }

    /// Simulated time at `hz` ticks per second.
    ///
    /// # Panics
    /// Panics if `hz` is zero.
    pub fn from_rate(hz: u32) -> Self {
        Self::new(Duration::from_secs(1) / hz)
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }
}

impl TimeSource for TickTime {
    #[inline]
    fn elapsed(&self) -> Duration {
        self.tick_duration.saturating_mul(self.ticks)
    }

    #[inline]
    fn on_tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    fn restart(&mut self) {
        self.ticks = 0;
    }
}

// ── SimulationClock ───────────────────────────────────────────────────────────

/// Tracks ticks and elapsed time against a fixed limit.
#[derive(Clone, Debug)]
pub struct SimulationClock<T: TimeSource = WallTime> {
    source:       T,
    limit:        Duration,
    current_tick: Tick,
}

impl<T: TimeSource> SimulationClock<T> {
    pub fn new(source: T, limit: Duration) -> Self {
        Self { source, limit, current_tick: Tick::ZERO }
    }

    /// Elapsed time according to the source.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.source.elapsed()
    }

    /// `true` once elapsed time strictly exceeds the limit.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.elapsed() > self.limit
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed())
    }

    #[inline]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// Record one completed tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
        self.source.on_tick();
    }
}

impl<T: TimeSource> fmt::Display for SimulationClock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.1}s of {:.1}s)",
            self.current_tick,
            self.elapsed().as_secs_f64(),
            self.limit.as_secs_f64()
        )
    }
}
