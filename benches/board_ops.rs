use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_collapse::core::{GameConfig, GameState, Grid, Randomizer};
use tui_collapse::types::{Block, ColorId, GRID_HEIGHT, GRID_WIDTH};

fn single_color_grid() -> Grid {
    let mut grid = Grid::new();
    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            grid.set(x, y, Block::new(ColorId::Red));
        }
    }
    grid
}

fn bench_flood_fill(c: &mut Criterion) {
    let template = single_color_grid();

    c.bench_function("find_matches_full_grid", |b| {
        b.iter(|| {
            let mut grid = template.clone();
            black_box(grid.find_matches(black_box(3), black_box(13)))
        })
    });
}

fn bench_settle(c: &mut Criterion) {
    // Remove the bottom half of the two center columns so everything above falls.
    let mut template = single_color_grid();
    for y in 7..GRID_HEIGHT as i8 {
        template.set(3, y, Block::EMPTY);
        template.set(4, y, Block::EMPTY);
    }

    c.bench_function("settle_after_clear", |b| {
        b.iter(|| {
            let mut grid = template.clone();
            black_box(grid.settle())
        })
    });
}

fn bench_randomizer(c: &mut Criterion) {
    let mut randomizer = Randomizer::with_seed(2, 3, 12345);

    c.bench_function("randomizer_next", |b| {
        b.iter(|| black_box(randomizer.next(black_box(6))))
    });
}

fn bench_new_board(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default());
    state.start();

    c.bench_function("restart_board", |b| {
        b.iter(|| {
            state.restart();
        })
    });
}

criterion_group!(
    benches,
    bench_flood_fill,
    bench_settle,
    bench_randomizer,
    bench_new_board
);
criterion_main!(benches);
