use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termtris::core::catalog::rotation_state;
use termtris::core::{GameState, Grid, Occupancy};
use termtris::engine::{Engine, EngineConfig, EngineSnapshot};
use termtris::types::{PieceKind, Rotation};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(10, 20, 12345).unwrap();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.start_new_game();
            }
            black_box(state.tick());
        })
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    let mut rows = vec![[0u32; 10]; 20];
    for row in rows.iter_mut().skip(16) {
        *row = [1; 10];
    }

    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::from_rows(&rows).unwrap();
            black_box(grid.clear_completed_rows());
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut rows = vec![[0u32; 10]; 20];
    rows[19] = [1, 1, 1, 1, 0, 1, 1, 1, 1, 1];
    let grid = Grid::from_rows(&rows).unwrap();
    let matrix = Occupancy::stamped(rotation_state(PieceKind::T, Rotation::R0), 2);

    c.bench_function("collides", |b| {
        b.iter(|| black_box(grid.collides(black_box(3), black_box(18), &matrix, 2)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(10, 20, 12345).unwrap();

    c.bench_function("rotate", |b| b.iter(|| black_box(state.rotate())));
}

fn bench_engine_snapshot(c: &mut Criterion) {
    let engine = Engine::new(&EngineConfig::default().with_seed(12345)).unwrap();
    let mut snap = EngineSnapshot::default();

    c.bench_function("engine_snapshot_into", |b| {
        b.iter(|| engine.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_rows,
    bench_collides,
    bench_rotate,
    bench_engine_snapshot
);
criterion_main!(benches);
