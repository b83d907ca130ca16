//! Path search trait and default A* implementation.
//!
//! # Pluggability
//!
//! The simulation calls search via the [`PathFinder`] trait, so a different
//! algorithm (jump-point search, a cached planner) can be swapped in without
//! touching the tick loop.  The default [`AStarPathFinder`] searches the
//! 4-connected grid with unit step cost and a Manhattan heuristic.
//!
//! # No-path is not an error
//!
//! An unreachable goal yields an empty [`Path`].  The caller treats that as
//! "do not move this tick" and tries again next tick, when obstacles may
//! have opened a way through.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use hunt_core::Cell;

use crate::GridField;

// ── Path ──────────────────────────────────────────────────────────────────────

/// Cells to step through in order, excluding the start and including the
/// goal.  Empty when no path exists or start equals goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The next cell to step onto.
    #[inline]
    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// The destination, if the path is non-empty.
    #[inline]
    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path search over a [`GridField`].
pub trait PathFinder {
    /// Compute a path from `start` to `goal` avoiding blocked cells.
    ///
    /// Returns an empty path if `goal` is unreachable or equal to `start`.
    fn find_path(&self, field: &GridField, start: Cell, goal: Cell) -> Path;
}

// ── AStarPathFinder ───────────────────────────────────────────────────────────

/// A* over the 4-connected grid.
///
/// Step cost is 1 and the heuristic is Manhattan distance, which is
/// consistent for these moves, so the first time the goal is popped its cost
/// is optimal.  Among equal-`f` entries the expansion order is unspecified;
/// callers may rely on path length, not on which of several shortest paths
/// comes back.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPathFinder;

impl PathFinder for AStarPathFinder {
    fn find_path(&self, field: &GridField, start: Cell, goal: Cell) -> Path {
        astar(field, start, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Sentinel for "no predecessor recorded".
const NO_PREV: usize = usize::MAX;

fn astar(field: &GridField, start: Cell, goal: Cell) -> Path {
    if start == goal {
        return Path::empty();
    }
    let (Some(start_ix), Some(goal_ix)) = (field.index_of(start), field.index_of(goal)) else {
        return Path::empty();
    };

    let n = field.cell_count();
    // g[v] = best known number of steps from start to v.
    let mut g    = vec![u32::MAX; n];
    // prev[v] = index of the cell that reached v with cost g[v].
    let mut prev = vec![NO_PREV; n];

    g[start_ix] = 0;

    // Min-heap on (f, cell index). Reverse turns BinaryHeap (max) into a
    // min-heap.
    let mut open: BinaryHeap<Reverse<(u32, usize)>> = BinaryHeap::new();
    open.push(Reverse((start.manhattan(goal), start_ix)));

    while let Some(Reverse((f, ix))) = open.pop() {
        if ix == goal_ix {
            return reconstruct(field, &prev, start_ix, goal_ix);
        }

        let cell = field.cell_at(ix);
        let cost = g[ix];

        // Skip stale heap entries superseded by a cheaper push.
        if f > cost.saturating_add(cell.manhattan(goal)) {
            continue;
        }

        for neighbour in field.open_neighbours(cell) {
            let Some(nix) = field.index_of(neighbour) else {
                continue;
            };
            let tentative = cost + 1;
            if tentative < g[nix] {
                g[nix]    = tentative;
                prev[nix] = ix;
                open.push(Reverse((tentative + neighbour.manhattan(goal), nix)));
            }
        }
    }

    Path::empty()
}

fn reconstruct(field: &GridField, prev: &[usize], start_ix: usize, goal_ix: usize) -> Path {
    let mut cells = Vec::new();
    let mut cur = goal_ix;
    while cur != start_ix {
        cells.push(field.cell_at(cur));
        cur = prev[cur];
        if cur == NO_PREV {
            // Unreachable while the predecessor chain is intact.
            return Path::empty();
        }
    }
    cells.reverse();
    Path { cells }
}
