//! Random-walk movement for obstacles.
//!
//! Once per tick every obstacle independently rolls to move.  A mover picks
//! a target by adding a random offset in `{-1, 0, 1}` to its row and column
//! (so diagonal steps and staying put are both possible), is lifted off its
//! cell, and is put down on the target only if the target is on the grid,
//! free of other obstacles, not a goal and not the agent.
//!
//! A rejected move is resolved by [`RelocationPolicy`]: under `Destroy` the
//! obstacle is gone for good, under `KeepInPlace` it goes back where it was.
//! Either way the obstacle count never grows.

use hunt_core::{Cell, RandomSource, RelocationPolicy};
use hunt_grid::GridField;

use crate::GoalSet;

/// Counters for one [`ObstacleAnimator::perturb`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PerturbStats {
    /// Obstacles that rolled to move.
    pub candidates: usize,
    /// Moves committed (a zero offset counts as a move back onto the same cell).
    pub moved: usize,
    /// Moves rejected, whether the obstacle was destroyed or kept.
    pub rejected: usize,
}

/// Per-tick obstacle perturbation policy.
#[derive(Clone, Debug)]
pub struct ObstacleAnimator {
    move_probability: f64,
    policy:           RelocationPolicy,
}

impl ObstacleAnimator {
    pub fn new(move_probability: f64, policy: RelocationPolicy) -> Self {
        Self { move_probability, policy }
    }

    pub fn move_probability(&self) -> f64 {
        self.move_probability
    }

    pub fn policy(&self) -> RelocationPolicy {
        self.policy
    }

    /// Move obstacles for one tick.
    ///
    /// Decisions are made over a snapshot of the blocked set taken before any
    /// obstacle moves, so each obstacle rolls exactly once; an obstacle that
    /// moved onto a fresh cell is not visited again this tick.
    pub fn perturb<G: RandomSource + ?Sized>(
        &self,
        field: &mut GridField,
        goals: &GoalSet,
        agent: Cell,
        rng:   &mut G,
    ) -> PerturbStats {
        let snapshot: Vec<Cell> = field.blocked().collect();
        let mut stats = PerturbStats::default();

        for obstacle in snapshot {
            if !rng.gen_bool(self.move_probability) {
                continue;
            }
            stats.candidates += 1;

            let target = obstacle.offset(rng.gen_step(), rng.gen_step());

            // Lift first: a zero offset then lands back on its own cell.
            field.remove_blocked(obstacle);

            let legal = field.in_bounds(target)
                && !field.is_blocked(target)
                && !goals.contains(target)
                && target != agent;

            if legal {
                field.add_blocked(target);
                stats.moved += 1;
            } else {
                stats.rejected += 1;
                if self.policy == RelocationPolicy::KeepInPlace {
                    field.add_blocked(obstacle);
                }
            }
        }

        stats
    }
}
