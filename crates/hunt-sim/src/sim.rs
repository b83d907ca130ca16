//! The `Sim` struct and its tick loop.

use hunt_core::{Cell, GameConfig, RandomSource, SimulationClock, TimeSource};
use hunt_grid::{GridField, PathFinder};
use tracing::{debug, info, trace};

use crate::{
    Frame, GoalSet, NoopObserver, ObstacleAnimator, RunEnd, RunSummary, SimObserver, SimState,
};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The game controller: owns the whole world and advances it one tick at a
/// time.
///
/// Each tick, while [`SimState::Running`]:
///
/// 1. **Won?** no goals left → `Won`, stop.
/// 2. **Timeout?** clock expired → `Timeout`, stop.
/// 3. **Target**: nearest remaining goal by Manhattan distance.
/// 4. **Plan**: fresh path from the agent to that goal.
/// 5. **Step**: move the agent onto the first cell of the path.  An empty
///    path (goal currently walled off) leaves the agent in place.
/// 6. **Capture**: if the agent stands on a goal, remove it and score 1.
/// 7. **Animate**: obstacles take their random-walk step.
/// 8. **Advance** the clock; if that was the last goal, → `Won` now.
///
/// Only one step is taken per tick even when the plan is longer: obstacles
/// move every tick, so the plan is rebuilt from scratch next time.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: PathFinder, T: TimeSource, G: RandomSource> {
    /// Configuration the run was built from.
    pub(crate) config: GameConfig,

    pub(crate) field: GridField,

    pub(crate) goals: GoalSet,

    pub(crate) agent: Cell,

    pub(crate) score: u32,

    pub(crate) clock: SimulationClock<T>,

    pub(crate) animator: ObstacleAnimator,

    pub(crate) finder: P,

    pub(crate) rng: G,

    pub(crate) state: SimState,
}

impl<P: PathFinder, T: TimeSource, G: RandomSource> Sim<P, T, G> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one tick and return a snapshot of the result.
    ///
    /// On a terminal state this is a no-op that returns the current frame,
    /// so a scheduler may keep calling it safely.
    pub fn tick(&mut self) -> Frame {
        self.process_tick(&mut NoopObserver);
        self.frame()
    }

    /// Tick until the run is won, times out, or `observer` asks to quit.
    ///
    /// Pacing is the observer's business: `run` itself never sleeps.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        let end = loop {
            match self.state {
                SimState::Won     => break RunEnd::Won,
                SimState::Timeout => break RunEnd::Timeout,
                SimState::Running => {}
            }

            let now = self.clock.current_tick();
            if observer.quit_requested(now) {
                info!(tick = now.0, score = self.score, "quit requested");
                break RunEnd::Quit;
            }

            observer.on_tick_start(now);
            self.process_tick(observer);
            observer.on_tick_end(&self.frame());
        };

        let summary = self.summary(end);
        observer.on_finish(&summary);
        summary
    }

    /// Run at most `n` ticks, stopping early on a terminal state.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimState {
        for _ in 0..n {
            if self.state.is_terminal() {
                break;
            }
            observer.on_tick_start(self.clock.current_tick());
            self.process_tick(observer);
            observer.on_tick_end(&self.frame());
        }
        self.state
    }

    /// Owned snapshot of the current world.
    pub fn frame(&self) -> Frame {
        Frame {
            tick:      self.clock.current_tick(),
            state:     self.state,
            agent:     self.agent,
            obstacles: self.field.blocked().collect(),
            goals:     self.goals.iter().collect(),
            score:     self.score,
            elapsed:   self.clock.elapsed(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> SimState {
        self.state
    }

    #[inline]
    pub fn agent(&self) -> Cell {
        self.agent
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn field(&self) -> &GridField {
        &self.field
    }

    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }

    pub fn clock(&self) -> &SimulationClock<T> {
        &self.clock
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        if self.state.is_terminal() {
            return;
        }
        let now = self.clock.current_tick();

        // ── Termination checks ────────────────────────────────────────────
        if self.goals.is_empty() {
            self.finish(SimState::Won);
            return;
        }
        if self.clock.is_expired() {
            self.finish(SimState::Timeout);
            return;
        }

        // ── Target, plan, step ────────────────────────────────────────────
        let Some(target) = self.goals.nearest(self.agent) else {
            unreachable!("goal set was checked non-empty above");
        };
        let path = self.finder.find_path(&self.field, self.agent, target);
        if let Some(next) = path.first() {
            self.agent = next;
        }
        trace!(tick = now.0, agent = %self.agent, %target, path_len = path.len(), "agent step");

        // ── Capture ───────────────────────────────────────────────────────
        if self.goals.capture(self.agent) {
            self.score += 1;
            debug!(
                tick = now.0,
                goal = %self.agent,
                score = self.score,
                remaining = self.goals.len(),
                "goal captured"
            );
            observer.on_capture(now, self.agent, self.score);
        }

        // ── Animate obstacles ─────────────────────────────────────────────
        let stats = self.animator.perturb(&mut self.field, &self.goals, self.agent, &mut self.rng);
        trace!(
            tick = now.0,
            candidates = stats.candidates,
            moved = stats.moved,
            rejected = stats.rejected,
            obstacles = self.field.blocked_count(),
            "obstacles perturbed"
        );

        self.clock.advance();

        if self.goals.is_empty() {
            self.finish(SimState::Won);
        }
    }

    fn finish(&mut self, state: SimState) {
        self.state = state;
        info!(
            %state,
            score = self.score,
            ticks = self.clock.current_tick().0,
            elapsed_secs = self.clock.elapsed().as_secs_f64(),
            "simulation finished"
        );
    }

    fn summary(&self, end: RunEnd) -> RunSummary {
        RunSummary {
            end,
            score:           self.score,
            ticks:           self.clock.current_tick(),
            elapsed:         self.clock.elapsed(),
            goals_remaining: self.goals.len(),
        }
    }
}
