//! Grid coordinates and the distance metric used throughout the simulation.
//!
//! Coordinates are signed so that a neighbour or random-walk target that
//! falls off the grid is still representable; bounds are checked by the grid,
//! not by the type.

use std::fmt;

/// The four unit moves of a 4-connected grid: up, down, left, right.
pub const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A `(row, col)` grid coordinate.
///
/// `Copy + Ord + Hash` so cells can live in ordered sets and be used as map
/// keys without ceremony.  Ordering is row-major.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell `(dr, dc)` away from `self`.  May lie outside any grid.
    #[inline]
    pub const fn offset(self, dr: i32, dc: i32) -> Cell {
        Cell { row: self.row + dr, col: self.col + dc }
    }

    /// Manhattan distance `|Δrow| + |Δcol|`.
    ///
    /// Admissible and consistent for unit-cost 4-connected moves.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The four orthogonal neighbours, unfiltered.
    #[inline]
    pub fn orthogonal_neighbours(self) -> [Cell; 4] {
        ORTHOGONAL_STEPS.map(|(dr, dc)| self.offset(dr, dc))
    }

    /// `true` if `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
