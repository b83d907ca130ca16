//! Run configuration.
//!
//! Fixed at start; nothing reconfigures a running simulation.  The binary
//! maps its command-line flags onto [`GameConfig`], and tests build one with
//! struct-update syntax from [`GameConfig::default`].

use std::time::Duration;

use crate::{HuntError, HuntResult};

/// Largest grid `validate` accepts.  Path search allocates per-cell state
/// every tick, so this bounds memory at a few tens of megabytes.
pub const MAX_CELLS: u64 = 1 << 22;

/// What happens to an obstacle whose random move lands on an illegal cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelocationPolicy {
    /// The obstacle is removed and not replaced.  Obstacles thin out over a
    /// long run.
    #[default]
    Destroy,
    /// The obstacle stays where it was.
    KeepInPlace,
}

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Grid height in cells.  Default: 30.
    pub rows: u32,

    /// Grid width in cells.  Default: 40.
    pub cols: u32,

    /// Ticks per second when paced in real time.  Default: 10.
    pub tick_rate_hz: u32,

    /// Time budget; the run times out once elapsed time exceeds it.
    /// Default: 60 s.
    pub time_limit: Duration,

    /// Number of goals placed at start.  Default: 10.
    pub goal_count: usize,

    /// Number of obstacle placements sampled at start.  Duplicates and
    /// samples landing on the agent or a goal are dropped, so the initial
    /// obstacle count can be lower.  Default: 70.
    pub obstacle_count: usize,

    /// Per-tick probability that an obstacle attempts a move.  Default: 0.3.
    pub move_probability: f64,

    /// Handling of rejected obstacle moves.
    pub relocation: RelocationPolicy,

    /// Master RNG seed.  `None` draws a fresh seed when the sim is built;
    /// the drawn seed is logged and stored in the sim's config.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows:             30,
            cols:             40,
            tick_rate_hz:     10,
            time_limit:       Duration::from_secs(60),
            goal_count:       10,
            obstacle_count:   70,
            move_probability: 0.3,
            relocation:       RelocationPolicy::Destroy,
            seed:             None,
        }
    }
}

impl GameConfig {
    /// Total number of cells in the grid.
    #[inline]
    pub fn total_cells(&self) -> u64 {
        self.rows as u64 * self.cols as u64
    }

    /// Wall-clock spacing between ticks at `tick_rate_hz`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }

    /// Reject configurations that cannot produce a playable world.
    pub fn validate(&self) -> HuntResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(HuntError::ZeroDimension { rows: self.rows, cols: self.cols });
        }
        // Search state is allocated per cell on every tick.
        if self.total_cells() > MAX_CELLS {
            return Err(HuntError::GridTooLarge { cells: self.total_cells(), max: MAX_CELLS });
        }
        // One cell for the agent plus one per goal.
        if (self.goal_count as u64).saturating_add(1) > self.total_cells() {
            return Err(HuntError::GridTooSmall {
                cells: self.total_cells(),
                goals: self.goal_count,
            });
        }
        if self.tick_rate_hz == 0 {
            return Err(HuntError::Config("tick rate must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.move_probability) {
            return Err(HuntError::Config(format!(
                "move probability {} is outside [0, 1]",
                self.move_probability
            )));
        }
        Ok(())
    }
}
