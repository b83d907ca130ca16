//! Terminal presentation: draws frames, paces ticks, and raises the quit
//! signal.  Everything here only reads `Frame`s handed over by the sim.

use std::fmt::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use hunt_core::{Cell, Tick};
use hunt_sim::{Frame, SimObserver};

const EMPTY:    char = '.';
const OBSTACLE: char = '#';
const EGG:      char = 'o';
const DINO:     char = 'D';

/// Window geometry the camera works in.  Rendering-only: the simulation
/// never sees pixels.
#[derive(Clone, Copy, Debug)]
pub struct ViewConfig {
    pub width_px:  u32,
    pub height_px: u32,
    pub cell_px:   u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { width_px: 800, height_px: 600, cell_px: 20 }
    }
}

impl ViewConfig {
    /// First visible `(row, col)` and the visible extent in cells.
    ///
    /// The camera puts the agent at the centre of the window but never
    /// scrolls past the top or left edge.
    pub fn viewport(&self, agent: Cell) -> (Cell, u32, u32) {
        let cell = self.cell_px.max(1) as i64;
        let offset_x = (agent.col as i64 * cell - self.width_px as i64 / 2).max(0);
        let offset_y = (agent.row as i64 * cell - self.height_px as i64 / 2).max(0);
        let origin = Cell::new((offset_y / cell) as i32, (offset_x / cell) as i32);
        let view_rows = (self.height_px as i64 / cell).max(1) as u32;
        let view_cols = (self.width_px as i64 / cell).max(1) as u32;
        (origin, view_rows, view_cols)
    }
}

/// Draw one frame as text: a score line followed by the visible grid.
pub fn render_frame(frame: &Frame, rows: u32, cols: u32, view: &ViewConfig) -> String {
    let (origin, view_rows, view_cols) = view.viewport(frame.agent);
    let last_row = (origin.row as i64 + view_rows as i64).min(rows as i64) as i32;
    let last_col = (origin.col as i64 + view_cols as i64).min(cols as i64) as i32;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Score: {}   Eggs left: {}   Time: {:.1}s   {}",
        frame.score,
        frame.goals.len(),
        frame.elapsed.as_secs_f64(),
        frame.tick
    );
    for row in origin.row..last_row {
        for col in origin.col..last_col {
            let cell = Cell::new(row, col);
            let glyph = if cell == frame.agent {
                DINO
            } else if frame.goals.binary_search(&cell).is_ok() {
                EGG
            } else if frame.obstacles.binary_search(&cell).is_ok() {
                OBSTACLE
            } else {
                EMPTY
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// Observer that renders every `render_every` ticks, sleeps to hold the
/// tick rate, and requests quit after `max_ticks` or once the quit flag is
/// raised.
pub struct TerminalView {
    view:         ViewConfig,
    rows:         u32,
    cols:         u32,
    render_every: Option<u64>,
    pace:         Option<Duration>,
    max_ticks:    Option<u64>,
    quit:         Option<Arc<AtomicBool>>,
    next_frame:   Option<Instant>,
}

impl TerminalView {
    pub fn new(view: ViewConfig, rows: u32, cols: u32) -> Self {
        Self {
            view,
            rows,
            cols,
            render_every: Some(1),
            pace:         None,
            max_ticks:    None,
            quit:         None,
            next_frame:   None,
        }
    }

    /// Render every `n` ticks; `None` disables drawing.
    pub fn render_every(mut self, n: Option<u64>) -> Self {
        self.render_every = n.filter(|&n| n > 0);
        self
    }

    /// Hold ticks at least `interval` apart.
    pub fn paced(mut self, interval: Option<Duration>) -> Self {
        self.pace = interval;
        self
    }

    /// Ask the sim to stop once this many ticks have run.
    pub fn max_ticks(mut self, n: Option<u64>) -> Self {
        self.max_ticks = n;
        self
    }

    /// Quit at the next tick boundary once `flag` is set.
    pub fn quit_on(mut self, flag: Arc<AtomicBool>) -> Self {
        self.quit = Some(flag);
        self
    }

    fn wait_for_next_frame(&mut self) {
        let Some(interval) = self.pace else {
            return;
        };
        let now = Instant::now();
        let deadline = self.next_frame.unwrap_or(now);
        if deadline > now {
            thread::sleep(deadline - now);
        }
        self.next_frame = Some(deadline.max(now) + interval);
    }
}

impl SimObserver for TerminalView {
    fn quit_requested(&mut self, tick: Tick) -> bool {
        self.max_ticks.is_some_and(|max| tick.0 >= max)
            || self.quit.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn on_tick_end(&mut self, frame: &Frame) {
        if self.render_every.is_some_and(|every| frame.tick.0 % every == 0) {
            let text = render_frame(frame, self.rows, self.cols, &self.view);
            if self.pace.is_some() {
                // Redraw in place when running live.
                print!("\x1b[H\x1b[2J");
            }
            print!("{text}");
        }
        self.wait_for_next_frame();
    }
}
