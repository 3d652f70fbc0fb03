//! Flood fill match engine tests

use tui_collapse::core::{Grid, SimpleRng};
use tui_collapse::types::{Block, ColorId, GRID_HEIGHT, GRID_WIDTH};

const W: usize = GRID_WIDTH as usize;
const H: usize = GRID_HEIGHT as usize;

/// Plain recursive fill over a copy of the colors, independent of `Grid`.
fn recursive_fill(
    colors: &[[ColorId; W]; H],
    x: isize,
    y: isize,
    target: ColorId,
    out: &mut [[bool; W]; H],
) {
    if x < 0 || y < 0 || x >= W as isize || y >= H as isize {
        return;
    }
    let (ux, uy) = (x as usize, y as usize);
    if out[uy][ux] || colors[uy][ux] != target {
        return;
    }
    out[uy][ux] = true;
    recursive_fill(colors, x, y - 1, target, out);
    recursive_fill(colors, x - 1, y, target, out);
    recursive_fill(colors, x + 1, y, target, out);
    recursive_fill(colors, x, y + 1, target, out);
}

#[test]
fn test_corner_pair_is_found_deleted_and_settled() {
    let mut grid = Grid::new();
    assert!(grid.set(7, 13, Block::new(ColorId::Red)));
    assert!(grid.set(7, 12, Block::new(ColorId::Red)));

    assert_eq!(grid.find_matches(7, 13), 2);
    assert_eq!(grid.delete_marked(), 2);
    assert_eq!(grid.get(7, 13), Some(Block::EMPTY));
    assert_eq!(grid.get(7, 12), Some(Block::EMPTY));
    assert!(!grid.apply_gravity());
}

#[test]
fn test_group_is_orthogonally_connected_same_color() {
    let mut grid = Grid::from_rows(&[
        "RRG.....",
        "GRG.....",
        "GRRR....",
        "BBBR....",
    ])
    .unwrap();

    assert_eq!(grid.find_matches(0, 10), 7);
    for (x, y) in [(0, 10), (1, 10), (1, 11), (1, 12), (2, 12), (3, 12), (3, 13)] {
        assert!(grid.get(x, y).unwrap().marked, "({x}, {y})");
    }
    assert!(!grid.get(2, 10).unwrap().marked);
    assert!(!grid.get(0, 13).unwrap().marked);

    assert_eq!(grid.delete_marked(), 7);
    assert_eq!(grid.occupied_count(), 7);
    assert_eq!(grid.marked_count(), 0);
}

#[test]
fn test_empty_cell_and_out_of_range_seed_match_nothing() {
    let mut grid = Grid::from_rows(&["RR......"]).unwrap();
    assert_eq!(grid.find_matches(5, 13), 0);
    assert_eq!(grid.find_matches(-1, 13), 0);
    assert_eq!(grid.find_matches(0, 14), 0);
    assert_eq!(grid.marked_count(), 0);
}

#[test]
fn test_rejected_group_can_be_forgotten() {
    let mut grid = Grid::from_rows(&["RRB....."]).unwrap();
    assert_eq!(grid.find_matches(0, 13), 2);
    grid.clear_flags();
    assert_eq!(grid.marked_count(), 0);
    assert_eq!(grid.delete_marked(), 0);
    assert_eq!(grid.occupied_count(), 3);
}

#[test]
fn test_group_queries_match_find_matches() {
    let mut grid = Grid::from_rows(&["YYY.....", "Y.YYG..."]).unwrap();
    let cells = grid.group_cells(0, 13);
    assert_eq!(cells.len(), 6);
    assert_eq!(grid.group_size(4, 13), 1);
    assert!(grid.has_group_of(6));
    assert!(!grid.has_group_of(7));
    assert_eq!(grid.marked_count(), 0);

    assert_eq!(grid.find_matches(0, 13), cells.len());
}

#[test]
fn test_clear_and_delete_are_idempotent() {
    let mut grid = Grid::from_rows(&["GG.B....", "GRRB...."]).unwrap();
    grid.find_matches(0, 13);
    grid.clear_flags();
    let once = grid.clone();
    grid.clear_flags();
    assert_eq!(grid, once);

    assert_eq!(grid.find_matches(1, 13), 2);
    assert_eq!(grid.delete_marked(), 2);
    let once = grid.clone();
    assert_eq!(grid.delete_marked(), 0);
    assert_eq!(grid, once);
}

#[test]
fn test_find_matches_agrees_with_recursive_fill_on_random_boards() {
    let palette = [
        ColorId::Empty,
        ColorId::Red,
        ColorId::Blue,
        ColorId::Yellow,
        ColorId::Green,
    ];
    let mut rng = SimpleRng::new(2718);

    for _ in 0..300 {
        let mut grid = Grid::new();
        let mut colors = [[ColorId::Empty; W]; H];
        for (y, row) in colors.iter_mut().enumerate() {
            for (x, color) in row.iter_mut().enumerate() {
                *color = palette[(rng.next_u32() >> 16) as usize % palette.len()];
                grid.set(x as i8, y as i8, Block::new(*color));
            }
        }

        let sx = ((rng.next_u32() >> 16) as usize % W) as i8;
        let sy = ((rng.next_u32() >> 16) as usize % H) as i8;
        let seed_color = colors[sy as usize][sx as usize];

        let mut expected = [[false; W]; H];
        if !seed_color.is_empty() {
            recursive_fill(&colors, sx as isize, sy as isize, seed_color, &mut expected);
        }
        let expected_count = expected.iter().flatten().filter(|&&m| m).count();

        assert_eq!(grid.find_matches(sx, sy), expected_count, "seed ({sx}, {sy})");
        for y in 0..H {
            for x in 0..W {
                let marked = grid.get(x as i8, y as i8).unwrap().marked;
                assert_eq!(marked, expected[y][x], "cell ({x}, {y}), seed ({sx}, {sy})");
            }
        }
    }
}
