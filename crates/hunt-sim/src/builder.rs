//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeSet;

use hunt_core::{
    Cell, GameConfig, RandomSource, SimRng, SimulationClock, TickTime, TimeSource, WallTime,
};
use hunt_grid::{AStarPathFinder, GridField, PathFinder};
use tracing::info;

use crate::placement::{place_agent, place_goals, scatter_obstacles};
use crate::{GoalSet, ObstacleAnimator, Sim, SimError, SimResult, SimState};

/// Fluent builder for [`Sim<P, T, G>`].
///
/// # Required inputs
///
/// - [`GameConfig`] — grid size, counts, time limit, move probability, …
/// - `P: PathFinder` — the search algorithm (e.g. [`AStarPathFinder`])
/// - `T: TimeSource` — [`WallTime`] for live runs, [`TickTime`] for
///   reproducible ones
/// - `G: RandomSource` — usually a seeded [`SimRng`]
///
/// # Optional inputs (random when omitted)
///
/// | Method            | Default                                         |
/// |-------------------|-------------------------------------------------|
/// | `.agent(c)`       | Uniform random cell                             |
/// | `.goals(v)`       | `goal_count` distinct random cells ≠ agent      |
/// | `.obstacles(v)`   | `obstacle_count` samples, minus goals and agent |
///
/// Explicit placements are validated; explicit obstacles overlapping a goal
/// or the agent are dropped, just like random ones.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, AStarPathFinder, WallTime::start(), SimRng::new(7))
///     .build()?;
/// let summary = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: PathFinder, T: TimeSource, G: RandomSource> {
    config:    GameConfig,
    finder:    P,
    time:      T,
    rng:       G,
    agent:     Option<Cell>,
    goals:     Option<Vec<Cell>>,
    obstacles: Option<Vec<Cell>>,
}

impl SimBuilder<AStarPathFinder, WallTime, SimRng> {
    /// A* search, wall-clock time, and an RNG seeded from `config.seed`
    /// (freshly drawn when unset).  The clock starts in [`build`][Self::build].
    pub fn live(mut config: GameConfig) -> Self {
        let rng = seed_rng(&mut config);
        Self::new(config, AStarPathFinder, WallTime::start(), rng)
    }
}

impl SimBuilder<AStarPathFinder, TickTime, SimRng> {
    /// A* search with simulated time at `config.tick_rate_hz`: the same seed
    /// always produces the same run.
    pub fn simulated(mut config: GameConfig) -> Self {
        let rng = seed_rng(&mut config);
        let time = TickTime::new(config.tick_interval());
        Self::new(config, AStarPathFinder, time, rng)
    }
}

impl<P: PathFinder, T: TimeSource, G: RandomSource> SimBuilder<P, T, G> {
    /// Create a builder with all required inputs.
    pub fn new(config: GameConfig, finder: P, time: T, rng: G) -> Self {
        Self {
            config,
            finder,
            time,
            rng,
            agent:     None,
            goals:     None,
            obstacles: None,
        }
    }

    /// Fix the agent's starting cell.
    pub fn agent(mut self, cell: Cell) -> Self {
        self.agent = Some(cell);
        self
    }

    /// Fix the goal cells.  Overrides `config.goal_count`.
    pub fn goals(mut self, cells: Vec<Cell>) -> Self {
        self.goals = Some(cells);
        self
    }

    /// Fix the obstacle cells.  Overrides `config.obstacle_count`.
    pub fn obstacles(mut self, cells: Vec<Cell>) -> Self {
        self.obstacles = Some(cells);
        self
    }

    /// Validate inputs, place everything, and return a ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<P, T, G>> {
        // Explicit placements replace the configured counts.
        if let Some(cells) = &self.goals {
            self.config.goal_count = cells.len();
        }
        if let Some(cells) = &self.obstacles {
            self.config.obstacle_count = cells.len();
        }
        self.config.validate()?;
        let mut field = GridField::new(self.config.rows, self.config.cols)?;

        // ── Agent ─────────────────────────────────────────────────────────
        let agent = match self.agent {
            Some(cell) => {
                check_bounds(&field, "agent", cell)?;
                cell
            }
            None => place_agent(&field, &mut self.rng),
        };

        // ── Goals ─────────────────────────────────────────────────────────
        let goals: BTreeSet<Cell> = match self.goals {
            Some(cells) => {
                let mut set = BTreeSet::new();
                for cell in cells {
                    check_bounds(&field, "goal", cell)?;
                    if cell == agent {
                        return Err(SimError::GoalOnAgent(cell));
                    }
                    if !set.insert(cell) {
                        return Err(SimError::DuplicateGoal(cell));
                    }
                }
                set
            }
            None => place_goals(&field, agent, self.config.goal_count, &mut self.rng),
        };

        // ── Obstacles ─────────────────────────────────────────────────────
        let placed = match self.obstacles {
            Some(cells) => {
                for cell in cells {
                    check_bounds(&field, "obstacle", cell)?;
                    if cell != agent && !goals.contains(&cell) {
                        field.add_blocked(cell);
                    }
                }
                field.blocked_count()
            }
            None => scatter_obstacles(
                &mut field,
                &goals,
                agent,
                self.config.obstacle_count,
                &mut self.rng,
            ),
        };

        info!(
            rows = field.rows(),
            cols = field.cols(),
            %agent,
            goals = goals.len(),
            obstacles = placed,
            limit_secs = self.config.time_limit.as_secs_f64(),
            "simulation built"
        );

        let animator = ObstacleAnimator::new(self.config.move_probability, self.config.relocation);
        self.time.restart();
        let clock = SimulationClock::new(self.time, self.config.time_limit);

        Ok(Sim {
            config: self.config,
            field,
            goals: GoalSet::new(goals),
            agent,
            score: 0,
            clock,
            animator,
            finder: self.finder,
            rng: self.rng,
            state: SimState::Running,
        })
    }
}

/// Pin the run's seed, drawing one if the config has none, so any run can be
/// replayed with the logged value.
fn seed_rng(config: &mut GameConfig) -> SimRng {
    let drawn = config.seed.is_none();
    let seed = *config.seed.get_or_insert_with(SimRng::entropy_seed);
    info!(seed, drawn, "rng seeded");
    SimRng::new(seed)
}

fn check_bounds(field: &GridField, what: &'static str, cell: Cell) -> SimResult<()> {
    if field.in_bounds(cell) {
        Ok(())
    } else {
        Err(SimError::OutOfBounds { what, cell, rows: field.rows(), cols: field.cols() })
    }
}
