//! `hunt-sim` — tick loop orchestrator for the grid hunt simulation.
//!
//! # Tick loop
//!
//! ```text
//! while state == Running:
//!   ① Terminate — no goals left → Won; clock expired → Timeout.
//!   ② Target    — nearest goal by Manhattan distance.
//!   ③ Plan      — A* from the agent to the target on the current field.
//!   ④ Step      — agent moves one cell along the plan (or stays if none).
//!   ⑤ Capture   — goal under the agent is removed, score += 1.
//!   ⑥ Animate   — obstacles random-walk; rejected moves follow the
//!                 configured RelocationPolicy.
//!   ⑦ Advance   — clock ticks; last goal captured → Won.
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on `Frame`, `RunSummary`, …     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hunt_core::GameConfig;
//! use hunt_sim::{NoopObserver, SimBuilder};
//!
//! let config = GameConfig { seed: Some(42), ..GameConfig::default() };
//! let mut sim = SimBuilder::simulated(config).build()?;
//! let summary = sim.run(&mut NoopObserver);
//! println!("{} with score {}", summary.end, summary.score);
//! ```

pub mod animator;
pub mod builder;
pub mod error;
pub mod frame;
pub mod goals;
pub mod observer;
pub mod placement;
pub mod sim;


pub use animator::{ObstacleAnimator, PerturbStats};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use frame::{Frame, RunEnd, RunSummary, SimState};
pub use goals::GoalSet;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
