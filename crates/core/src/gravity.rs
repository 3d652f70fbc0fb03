//! Gravity - settles the grid after blocks are removed
//!
//! One gravity step runs two phases:
//!
//! 1. **Drop**: every column with a gap below its topmost block moves each
//!    floating block down by exactly one row.
//! 2. **Collapse**: only when no column dropped, walk outward from the middle
//!    of the grid and slide non-empty columns one step towards the center
//!    into an adjacent empty column.
//!
//! A step moves things by at most one cell, which gives the frontend its fall
//! animation. Callers repeat [`Grid::apply_gravity`] until it returns false,
//! or use [`Grid::settle`] to run it to completion.

use tracing::trace;

use crate::grid::Grid;
use crate::types::{Block, GRID_HEIGHT, GRID_WIDTH};

/// What a single gravity step changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GravityStep {
    /// At least one column had a gap and its floating blocks moved down
    pub dropped: bool,
    /// At least one column slid towards the center
    pub shifted: bool,
}

impl GravityStep {
    pub fn changed(&self) -> bool {
        self.dropped || self.shifted
    }
}

impl Grid {
    /// Run one gravity step; returns true if the grid changed.
    pub fn apply_gravity(&mut self) -> bool {
        self.gravity_step().changed()
    }

    /// Run one gravity step and report both phases separately.
    pub fn gravity_step(&mut self) -> GravityStep {
        let dropped = self.drop_columns();
        let shifted = !dropped && self.collapse_columns();
        let step = GravityStep { dropped, shifted };
        if step.changed() {
            trace!(dropped, shifted, "gravity step");
        }
        step
    }

    /// Apply gravity until nothing moves; returns the number of changing steps.
    pub fn settle(&mut self) -> usize {
        let mut steps = 0;
        while self.apply_gravity() {
            steps += 1;
        }
        steps
    }

    /// Check if column `x` has an empty cell below its topmost block
    pub fn is_column_broken(&self, x: usize) -> bool {
        match self.top_of_column(x) {
            Some(top) => {
                (top..GRID_HEIGHT as usize).any(|y| self.cells[Self::idx(x, y)].is_empty())
            }
            None => false,
        }
    }

    /// Drop phase: move floating blocks of every broken column down one row.
    fn drop_columns(&mut self) -> bool {
        let mut dropped = false;

        for x in 0..GRID_WIDTH as usize {
            let Some(top) = self.top_of_column(x) else {
                continue;
            };
            if !self.is_column_broken(x) {
                continue;
            }
            dropped = true;

            // Bottom-up: each floating block moves exactly one row.
            for y in (top..GRID_HEIGHT as usize - 1).rev() {
                let upper = Self::idx(x, y);
                let lower = Self::idx(x, y + 1);
                if self.cells[lower].is_empty() && !self.cells[upper].is_empty() {
                    self.cells[lower] = Block::new(self.cells[upper].color);
                    self.cells[upper].reset();
                }
            }
        }

        dropped
    }

    /// Collapse phase: slide columns towards the center into empty neighbors.
    ///
    /// The left walk starts two columns left of the midpoint and the right walk
    /// one column right of it; both advance outward in lockstep until either
    /// runs off the grid. Each check sees the moves made earlier in the walk,
    /// so a run of columns can follow a gap inward in the same step.
    fn collapse_columns(&mut self) -> bool {
        let width = GRID_WIDTH as isize;
        let mut shifted = false;
        let mut left = width / 2 - 2;
        let mut right = width / 2 + 1;

        while left >= 0 && right < width {
            let (l, r) = (left as usize, right as usize);

            if self.is_column_empty(l + 1) && !self.is_column_empty(l) {
                self.move_column(l, l + 1);
                shifted = true;
            }

            if self.is_column_empty(r - 1) && !self.is_column_empty(r) {
                self.move_column(r, r - 1);
                shifted = true;
            }

            left -= 1;
            right += 1;
        }

        shifted
    }

    /// Copy every row of column `from` into column `to`, then empty `from`.
    fn move_column(&mut self, from: usize, to: usize) {
        for y in 0..GRID_HEIGHT as usize {
            let color = self.cells[Self::idx(from, y)].color;
            self.cells[Self::idx(to, y)] = Block::new(color);
            self.cells[Self::idx(from, y)].reset();
        }
    }
}
