//! Grid module - the playfield of colored blocks
//!
//! The grid is an 8x14 array of blocks stored in a flat array, row-major
//! (`y * WIDTH + x`). Coordinates: x ranges 0..7 (left to right), y ranges
//! 0..13 (top to bottom). Row 13 is the floor that blocks fall towards.
//!
//! Access is split in two flavors:
//! - **Strict**: [`Grid::get`] and [`Grid::set`] report out-of-range
//!   coordinates as `None` / `false`.
//! - **Permissive**: [`Grid::color_at`] answers `ColorId::Empty` for
//!   out-of-range coordinates. Neighbor probes rely on this: a cell outside the
//!   grid can never be part of a match and never supports a block.

use crate::types::{Block, ColorId, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH};

/// The playfield - 8 columns x 14 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of blocks, row-major order (y * WIDTH + x)
    pub(crate) cells: [Block; GRID_SIZE],
}

impl Grid {
    /// Create a new, all-empty grid
    pub fn new() -> Self {
        Self {
            cells: [Block::EMPTY; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub(crate) fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    /// Flat index for coordinates already known to be in range
    #[inline(always)]
    pub(crate) fn idx(x: usize, y: usize) -> usize {
        y * GRID_WIDTH as usize + x
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get the block at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Block> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Overwrite the block at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, block: Block) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = block;
                true
            }
            None => false,
        }
    }

    /// Color at position (x, y), or `ColorId::Empty` when out of bounds.
    ///
    /// This read is intentionally permissive, unlike [`Grid::set`].
    pub fn color_at(&self, x: i8, y: i8) -> ColorId {
        self.get(x, y).map_or(ColorId::Empty, |block| block.color)
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Reset every cell to `{Empty, unmarked}`
    pub fn reset(&mut self) {
        for block in &mut self.cells {
            block.reset();
        }
    }

    /// Topmost occupied row of column `x`, or None if the column is empty
    /// (or `x` is out of range).
    pub fn top_of_column(&self, x: usize) -> Option<usize> {
        if x >= GRID_WIDTH as usize {
            return None;
        }
        (0..GRID_HEIGHT as usize).find(|&y| !self.cells[Self::idx(x, y)].is_empty())
    }

    pub fn is_column_empty(&self, x: usize) -> bool {
        self.top_of_column(x).is_none()
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|block| !block.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Block::is_empty)
    }

    /// Number of cells currently flagged by match detection
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|block| block.marked).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Block] {
        &self.cells
    }

    /// Build a grid from text rows, one letter per cell (see `ColorId::from_char`).
    ///
    /// Rows are bottom-aligned: with fewer than 14 rows, the missing rows on top
    /// are empty. Short rows are padded with empty cells on the right. Returns
    /// None for an unknown letter or when the text does not fit the grid.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() > GRID_HEIGHT as usize {
            return None;
        }
        let mut grid = Self::new();
        let offset = GRID_HEIGHT as usize - rows.len();
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() > GRID_WIDTH as usize {
                return None;
            }
            for (x, ch) in line.chars().enumerate() {
                let color = ColorId::from_char(ch)?;
                grid.cells[Self::idx(x, row + offset)] = Block::new(color);
            }
        }
        Some(grid)
    }

    /// Render the grid as text rows, the inverse of [`Grid::from_rows`] for a full grid
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(GRID_WIDTH as usize)
            .map(|row| row.iter().map(|block| block.color.as_char()).collect())
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
