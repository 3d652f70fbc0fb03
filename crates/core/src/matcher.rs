//! Match detection - flood fill over same-colored neighbors
//!
//! A match is the 4-connected group of same-colored blocks around a seed cell.
//! The search uses an explicit work-list instead of recursion, so the stack
//! depth does not grow with the group size. The same fill backs the marking
//! pass ([`Grid::find_matches`]) and the read-only queries used for previews
//! and "any moves left" checks.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{GRID_SIZE, GRID_WIDTH};

/// Neighbor offsets: up, left, right, down
const NEIGHBORS: [(i8, i8); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

impl Grid {
    /// Mark the group connected to (x, y) and return the number of marked cells.
    ///
    /// Empty and out-of-range seeds never match and return 0 without touching
    /// any flag. The count covers every marked cell on the grid, so on a grid
    /// with clear flags it equals the size of the seed's group.
    ///
    /// The group stays marked: follow up with [`Grid::delete_marked`] or
    /// [`Grid::clear_flags`].
    pub fn find_matches(&mut self, x: i8, y: i8) -> usize {
        if self.color_at(x, y).is_empty() {
            return 0;
        }

        // Already-marked cells count as visited.
        let mut seen = [false; GRID_SIZE];
        for (flag, block) in seen.iter_mut().zip(self.cells.iter()) {
            *flag = block.marked;
        }

        let mut hits: ArrayVec<usize, GRID_SIZE> = ArrayVec::new();
        self.flood(x, y, &mut seen, |idx| hits.push(idx));
        for idx in hits {
            self.cells[idx].marked = true;
        }

        self.marked_count()
    }

    /// Unmark every cell
    pub fn clear_flags(&mut self) {
        for block in &mut self.cells {
            block.marked = false;
        }
    }

    /// Reset every marked cell to empty, returning how many were removed
    pub fn delete_marked(&mut self) -> usize {
        let mut removed = 0;
        for block in self.cells.iter_mut().filter(|block| block.marked) {
            block.reset();
            removed += 1;
        }
        removed
    }

    /// Cells of the group at (x, y), without reading or writing marked flags
    pub fn group_cells(&self, x: i8, y: i8) -> ArrayVec<(i8, i8), GRID_SIZE> {
        let mut seen = [false; GRID_SIZE];
        let mut cells = ArrayVec::new();
        self.flood(x, y, &mut seen, |idx| cells.push(Self::coords(idx)));
        cells
    }

    /// Size of the group at (x, y), without reading or writing marked flags
    pub fn group_size(&self, x: i8, y: i8) -> usize {
        let mut seen = [false; GRID_SIZE];
        self.flood(x, y, &mut seen, |_| {})
    }

    /// Check whether any group of at least `min` blocks exists.
    pub fn has_group_of(&self, min: usize) -> bool {
        let mut seen = [false; GRID_SIZE];
        (0..GRID_SIZE).any(|idx| {
            let (x, y) = Self::coords(idx);
            !seen[idx] && self.flood(x, y, &mut seen, |_| {}) >= min.max(1)
        })
    }

    fn coords(idx: usize) -> (i8, i8) {
        (
            (idx % GRID_WIDTH as usize) as i8,
            (idx / GRID_WIDTH as usize) as i8,
        )
    }

    /// Work-list flood fill from (x, y) over same-colored, unseen cells.
    ///
    /// Calls `visit` once per cell of the group and returns the group size.
    /// Cells are flagged in `seen` before they are pushed, so the work-list
    /// holds each cell at most once.
    fn flood(
        &self,
        x: i8,
        y: i8,
        seen: &mut [bool; GRID_SIZE],
        mut visit: impl FnMut(usize),
    ) -> usize {
        let Some(start) = Self::index(x, y) else {
            return 0;
        };
        let color = self.cells[start].color;
        if color.is_empty() || seen[start] {
            return 0;
        }

        let mut stack: ArrayVec<(i8, i8), GRID_SIZE> = ArrayVec::new();
        let mut size = 0;
        seen[start] = true;
        stack.push((x, y));

        while let Some((cx, cy)) = stack.pop() {
            if let Some(idx) = Self::index(cx, cy) {
                visit(idx);
            }
            size += 1;

            for &(dx, dy) in &NEIGHBORS {
                let (nx, ny) = (cx + dx, cy + dy);
                let Some(n) = Self::index(nx, ny) else {
                    continue;
                };
                if seen[n] || self.cells[n].color != color {
                    continue;
                }
                seen[n] = true;
                stack.push((nx, ny));
            }
        }

        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Block, ColorId};

    #[test]
    fn test_empty_seed_matches_nothing() {
        let mut grid = Grid::from_rows(&["R."]).unwrap();
        assert_eq!(grid.find_matches(1, 13), 0);
        assert_eq!(grid.find_matches(0, 0), 0);
        assert_eq!(grid.marked_count(), 0);
    }

    #[test]
    fn test_out_of_range_seed_matches_nothing() {
        let mut grid = Grid::from_rows(&["RRRRRRRR"]).unwrap();
        assert_eq!(grid.find_matches(-1, 13), 0);
        assert_eq!(grid.find_matches(8, 13), 0);
        assert_eq!(grid.find_matches(0, 14), 0);
        assert_eq!(grid.marked_count(), 0);
    }

    #[test]
    fn test_diagonal_is_not_connected() {
        let mut grid = Grid::from_rows(&["R.", ".R"]).unwrap();
        assert_eq!(grid.find_matches(0, 12), 1);
        assert!(!grid.get(1, 13).unwrap().marked);
    }

    #[test]
    fn test_winding_group() {
        let mut grid = Grid::from_rows(&[
            "GGGG", //
            "BBBG", //
            "GGGG", //
            "GBBB", //
            "GGGG",
        ])
        .unwrap();
        assert_eq!(grid.find_matches(0, 9), 14);
        assert_eq!(grid.get(0, 10), Some(Block { color: ColorId::Blue, marked: false }));
    }

    #[test]
    fn test_group_queries_leave_no_flags() {
        let grid = Grid::from_rows(&["YY", "YB"]).unwrap();
        assert_eq!(grid.group_size(0, 13), 3);
        assert_eq!(grid.group_size(1, 13), 1);
        assert_eq!(grid.group_size(5, 13), 0);

        let mut cells = grid.group_cells(1, 12).to_vec();
        cells.sort();
        assert_eq!(cells, vec![(0, 12), (0, 13), (1, 12)]);
        assert_eq!(grid.marked_count(), 0);
    }

    #[test]
    fn test_marked_cells_are_not_revisited() {
        let mut grid = Grid::from_rows(&["RRRR"]).unwrap();
        grid.set(1, 13, Block { color: ColorId::Red, marked: true });
        // The marked cell splits the row; the count still covers it.
        assert_eq!(grid.find_matches(0, 13), 2);
        assert!(!grid.get(2, 13).unwrap().marked);
    }

    #[test]
    fn test_has_group_of() {
        let grid = Grid::from_rows(&["RGR", "GRG"]).unwrap();
        assert!(grid.has_group_of(1));
        assert!(!grid.has_group_of(2));

        let grid = Grid::from_rows(&["RGR", "GGG"]).unwrap();
        assert!(grid.has_group_of(4));
        assert!(!grid.has_group_of(5));

        assert!(!Grid::new().has_group_of(1));
    }

    #[test]
    fn test_full_grid_single_color() {
        let mut grid = Grid::from_rows(&["BBBBBBBB"; 14]).unwrap();
        assert_eq!(grid.find_matches(3, 7), GRID_SIZE);
        assert_eq!(grid.delete_marked(), GRID_SIZE);
        assert!(grid.is_empty());
    }
}
