//! The set of goals still to be captured.

use std::collections::BTreeSet;

use hunt_core::Cell;

/// Remaining goal cells.
///
/// Ordered so that nearest-goal ties resolve the same way on every run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoalSet {
    cells: BTreeSet<Cell>,
}

impl GoalSet {
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self { cells: cells.into_iter().collect() }
    }

    /// The goal with the smallest Manhattan distance to `from`.
    ///
    /// Ties go to the first goal in row-major order.  `None` only when the
    /// set is empty.
    pub fn nearest(&self, from: Cell) -> Option<Cell> {
        self.cells.iter().copied().min_by_key(|g| from.manhattan(*g))
    }

    /// Remove `cell` if it is a goal.  Returns whether anything was removed.
    #[inline]
    pub fn capture(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Goals in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}
