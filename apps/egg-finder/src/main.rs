//! egg-finder — a dinosaur hunts for eggs on a grid of drifting obstacles.
//!
//! Each tick the dinosaur plans an A* path to the nearest egg and takes one
//! step; obstacles then random-walk.  The run ends when every egg is found,
//! when the time limit passes, or on quit (Ctrl-C or `--max-ticks`).  A quit
//! takes effect at the next tick boundary and still prints the final score.
//!
//! By default the run is paced in real time and the budget is wall-clock
//! seconds.  `--simulated-time` runs flat out with time derived from the
//! tick count, so a seed reproduces the run exactly.

mod render;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hunt_core::{GameConfig, RandomSource, RelocationPolicy, TimeSource};
use hunt_grid::PathFinder;
use hunt_sim::{RunEnd, RunSummary, Sim, SimBuilder};

use render::{TerminalView, ViewConfig};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid height in cells
    #[arg(long, default_value_t = 30)]
    rows: u32,

    /// Grid width in cells
    #[arg(long, default_value_t = 40)]
    cols: u32,

    /// Number of eggs to find
    #[arg(long, default_value_t = 10)]
    eggs: usize,

    /// Number of obstacle placements sampled at start
    #[arg(long, default_value_t = 70)]
    obstacles: usize,

    /// Per-tick probability that an obstacle tries to move
    #[arg(long, default_value_t = 0.3)]
    move_probability: f64,

    /// Time limit in seconds
    #[arg(long, default_value_t = 60.0)]
    time_limit: f64,

    /// Ticks per second
    #[arg(long, default_value_t = 10)]
    tick_rate: u32,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Leave an obstacle in place when its move is rejected instead of removing it
    #[arg(long)]
    keep_obstacles: bool,

    /// Derive time from the tick count and run without pacing
    #[arg(long)]
    simulated_time: bool,

    /// Quit after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Draw every N ticks
    #[arg(long, default_value_t = 1)]
    render_every: u64,

    /// Do not draw the grid
    #[arg(long)]
    no_render: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Window width in pixels (camera size)
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in pixels (camera size)
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Cell size in pixels
    #[arg(long, default_value_t = 20)]
    cell_px: u32,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let time_limit = Duration::try_from_secs_f64(self.time_limit)
            .with_context(|| format!("invalid time limit: {}", self.time_limit))?;
        let config = GameConfig {
            rows: self.rows,
            cols: self.cols,
            tick_rate_hz: self.tick_rate,
            time_limit,
            goal_count: self.eggs,
            obstacle_count: self.obstacles,
            move_probability: self.move_probability,
            relocation: if self.keep_obstacles {
                RelocationPolicy::KeepInPlace
            } else {
                RelocationPolicy::Destroy
            },
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }

    fn view(&self, config: &GameConfig) -> TerminalView {
        let view = ViewConfig { width_px: self.width, height_px: self.height, cell_px: self.cell_px };
        let pace = (!self.simulated_time).then(|| config.tick_interval());
        let render_every = (!self.no_render).then_some(self.render_every);
        TerminalView::new(view, config.rows, config.cols)
            .render_every(render_every)
            .paced(pace)
            .max_ticks(self.max_ticks)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.game_config()?;
    let quit = Arc::new(AtomicBool::new(false));
    watch_ctrl_c(Arc::clone(&quit))?;
    let mut view = args.view(&config).quit_on(quit);

    info!(
        rows = config.rows,
        cols = config.cols,
        eggs = config.goal_count,
        seed = ?config.seed,
        simulated = args.simulated_time,
        "starting egg hunt"
    );

    let summary = if args.simulated_time {
        play(SimBuilder::simulated(config).build()?, &mut view)
    } else {
        play(SimBuilder::live(config).build()?, &mut view)
    };

    println!("{}", final_message(&summary));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

/// Raise `flag` on Ctrl-C.  The signal listener runs on its own
/// single-threaded runtime so the tick loop stays synchronous.
fn watch_ctrl_c(flag: Arc<AtomicBool>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building signal runtime")?;
    thread::Builder::new()
        .name("ctrl-c".into())
        .spawn(move || {
            runtime.block_on(async {
                loop {
                    match tokio::signal::ctrl_c().await {
                        Ok(()) => {
                            info!("ctrl-c received, quitting at the next tick");
                            flag.store(true, Ordering::Relaxed);
                        }
                        Err(err) => {
                            warn!(%err, "cannot listen for ctrl-c");
                            return;
                        }
                    }
                }
            });
        })
        .context("spawning signal thread")?;
    Ok(())
}

fn play<P, T, G>(mut sim: Sim<P, T, G>, view: &mut TerminalView) -> RunSummary
where
    P: PathFinder,
    T: TimeSource,
    G: RandomSource,
{
    sim.run(view)
}

fn final_message(summary: &RunSummary) -> String {
    match summary.end {
        RunEnd::Won => format!("All eggs found! You win! Final Score: {}", summary.score),
        RunEnd::Timeout => format!("Time's up! Game Over! Final Score: {}", summary.score),
        RunEnd::Quit => format!(
            "Quit after {} ticks. Final Score: {}",
            summary.ticks.0, summary.score
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use hunt_core::{RelocationPolicy, Tick};
    use hunt_sim::{RunEnd, RunSummary};

    use super::{Args, final_message};

    #[test]
    fn defaults_match_the_classic_game() {
        let args = Args::parse_from(["egg-finder"]);
        let config = args.game_config().unwrap();
        assert_eq!((config.rows, config.cols), (30, 40));
        assert_eq!(config.goal_count, 10);
        assert_eq!(config.obstacle_count, 70);
        assert_eq!(config.time_limit, Duration::from_secs(60));
        assert_eq!(config.relocation, RelocationPolicy::Destroy);
    }

    #[test]
    fn keep_obstacles_flag_switches_policy() {
        let args = Args::parse_from(["egg-finder", "--keep-obstacles", "--seed", "5"]);
        let config = args.game_config().unwrap();
        assert_eq!(config.relocation, RelocationPolicy::KeepInPlace);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn impossible_grid_is_rejected() {
        let args = Args::parse_from(["egg-finder", "--rows", "2", "--cols", "2", "--eggs", "4"]);
        assert!(args.game_config().is_err());
    }

    #[test]
    fn final_messages() {
        let summary = RunSummary {
            end:             RunEnd::Won,
            score:           10,
            ticks:           Tick(120),
            elapsed:         Duration::from_secs(12),
            goals_remaining: 0,
        };
        assert_eq!(final_message(&summary), "All eggs found! You win! Final Score: 10");
        let timeout = RunSummary { end: RunEnd::Timeout, score: 4, ..summary.clone() };
        assert_eq!(final_message(&timeout), "Time's up! Game Over! Final Score: 4");
        let quit = RunSummary { end: RunEnd::Quit, score: 1, ticks: Tick(7), ..summary };
        assert_eq!(final_message(&quit), "Quit after 7 ticks. Final Score: 1");
    }
}
