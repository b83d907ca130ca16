//! Grid bounds and the blocked-cell set.
//!
//! `GridField` answers two questions, "is this cell on the grid?" and "is
//! this cell blocked?", and lets its owner add or remove obstacles.  It does
//! not know about goals or the agent: keeping obstacles off those cells is
//! the orchestrator's job.
//!
//! The blocked set is a `BTreeSet` so that iterating it (as the obstacle
//! animator does every tick) visits cells in the same order for a given
//! seed, which keeps runs reproducible.

use std::collections::BTreeSet;

use hunt_core::{Cell, HuntError, HuntResult, RandomSource};

/// A fixed `rows × cols` grid with a mutable set of blocked cells.
#[derive(Clone, Debug)]
pub struct GridField {
    rows:    u32,
    cols:    u32,
    blocked: BTreeSet<Cell>,
}

impl GridField {
    /// Create an empty grid.  Both dimensions must be positive.
    pub fn new(rows: u32, cols: u32) -> HuntResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(HuntError::ZeroDimension { rows, cols });
        }
        if rows > i32::MAX as u32 || cols > i32::MAX as u32 {
            return Err(HuntError::Config(format!(
                "grid {rows}x{cols} exceeds the coordinate range"
            )));
        }
        Ok(Self { rows, cols, blocked: BTreeSet::new() })
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells, blocked or not.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` iff `0 ≤ row < rows` and `0 ≤ col < cols`.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as u32) < self.rows
            && (cell.col as u32) < self.cols
    }

    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked.contains(&cell)
    }

    /// In bounds and not blocked: a cell the agent may stand on.
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_blocked(cell)
    }

    /// Open orthogonal neighbours of `cell`.
    pub fn open_neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.orthogonal_neighbours()
            .into_iter()
            .filter(move |&n| self.is_open(n))
    }

    /// Row-major index of an in-bounds cell, for dense per-cell arrays.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// Inverse of [`index_of`][Self::index_of].
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        let cols = self.cols as usize;
        Cell::new((index / cols) as i32, (index % cols) as i32)
    }

    // ── Obstacles ─────────────────────────────────────────────────────────

    /// Mark `cell` blocked.  Returns `false` if it already was.
    ///
    /// No invariant checks: callers keep obstacles off goals and the agent.
    #[inline]
    pub fn add_blocked(&mut self, cell: Cell) -> bool {
        self.blocked.insert(cell)
    }

    /// Unblock `cell`.  Returns `false` if it was not blocked.
    #[inline]
    pub fn remove_blocked(&mut self, cell: Cell) -> bool {
        self.blocked.remove(&cell)
    }

    #[inline]
    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }

    /// Blocked cells in row-major order.
    pub fn blocked(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked.iter().copied()
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// A uniformly random in-bounds cell (blocked or not).
    pub fn random_cell<G: RandomSource + ?Sized>(&self, rng: &mut G) -> Cell {
        let row = rng.gen_below(self.rows) as i32;
        let col = rng.gen_below(self.cols) as i32;
        Cell::new(row, col)
    }
}
