use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::engine::{spawn, try_rotate, try_shift};
use blockfall::core::{Game, Grid, Piece, SimpleRng};
use blockfall::types::ShapeKind;

fn bench_step(c: &mut Criterion) {
    c.bench_function("game_step", |b| {
        let mut game = Game::new(12345);
        b.iter(|| {
            if game.topped_out() {
                game = Game::new(12345);
            }
            black_box(game.step());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, true);
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("spawn_piece", |b| {
        let mut rng = SimpleRng::new(12345);
        b.iter(|| {
            black_box(spawn(&mut rng));
        })
    });
}

fn bench_try_shift(c: &mut Criterion) {
    let grid = Grid::new();
    let piece = Piece::new(ShapeKind::T, 4, 10);

    c.bench_function("try_shift", |b| {
        b.iter(|| {
            black_box(try_shift(&grid, &piece, black_box(1), 0));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let grid = Grid::new();
    let piece = Piece::new(ShapeKind::T, 4, 10);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            black_box(try_rotate(&grid, &piece));
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_line_clear,
    bench_spawn,
    bench_try_shift,
    bench_try_rotate
);
criterion_main!(benches);
