//! Injectable randomness for placement and obstacle movement.
//!
//! # Determinism strategy
//!
//! All random decisions in the simulation go through [`RandomSource`], so a
//! run is reproducible from a single `u64` seed and tests can substitute a
//! scripted source.  The default implementation, [`SimRng`], wraps
//! `SmallRng`: fast, not cryptographic, and stable for a given seed within a
//! `rand` release.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The two primitive draws the simulation needs.
///
/// Everything else (random cells, random-walk offsets) is derived from these,
/// so a test double only has to script booleans and bounded integers.
pub trait RandomSource {
    /// `true` with probability `p` (clamped to [0, 1]).
    fn gen_bool(&mut self, p: f64) -> bool;

    /// A uniform integer in `0..n`.  `n` must be non-zero.
    fn gen_below(&mut self, n: u32) -> u32;

    /// A uniform step in `{-1, 0, 1}`.
    #[inline]
    fn gen_step(&mut self) -> i32 {
        self.gen_below(3) as i32 - 1
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Used only from the single-threaded tick loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a fresh seed from the thread RNG.  Record it: a run is only
    /// replayable from the seed it was built with.
    pub fn entropy_seed() -> u64 {
        rand::random()
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    #[inline]
    fn gen_below(&mut self, n: u32) -> u32 {
        self.0.gen_range(0..n)
    }
}
