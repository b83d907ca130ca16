//! Initial random placement of the agent, goals and obstacles.
//!
//! The agent is placed first, then goals are drawn until enough distinct
//! cells other than the agent's have been found.  Obstacles are sampled
//! `obstacle_count` times with replacement; duplicates collapse, and samples
//! landing on a goal or the agent are discarded, so the grid usually starts
//! with somewhat fewer obstacles than requested.

use std::collections::BTreeSet;

use hunt_core::{Cell, RandomSource};
use hunt_grid::GridField;

/// A uniformly random starting cell for the agent.
pub fn place_agent<G: RandomSource + ?Sized>(field: &GridField, rng: &mut G) -> Cell {
    field.random_cell(rng)
}

/// `count` distinct random cells, none equal to `agent`.
///
/// Rejection sampling; the caller guarantees `count < field.cell_count()`
/// (checked by `GameConfig::validate`), so the loop terminates.
pub fn place_goals<G: RandomSource + ?Sized>(
    field: &GridField,
    agent: Cell,
    count: usize,
    rng:   &mut G,
) -> BTreeSet<Cell> {
    let mut goals = BTreeSet::new();
    while goals.len() < count {
        let cell = field.random_cell(rng);
        if cell != agent {
            goals.insert(cell);
        }
    }
    goals
}

/// Sample `count` obstacle cells and block those that are neither a goal
/// nor the agent.  Returns the number of obstacles actually placed.
pub fn scatter_obstacles<G: RandomSource + ?Sized>(
    field: &mut GridField,
    goals: &BTreeSet<Cell>,
    agent: Cell,
    count: usize,
    rng:   &mut G,
) -> usize {
    let samples: Vec<Cell> = (0..count).map(|_| field.random_cell(rng)).collect();
    for cell in samples {
        if cell != agent && !goals.contains(&cell) {
            field.add_blocked(cell);
        }
    }
    field.blocked_count()
}
