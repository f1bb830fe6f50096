use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, Engine, EngineConfig, SimpleRng};
use blockfall::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

fn new_engine() -> Engine {
    Engine::new(EngineConfig::default(), Box::new(SimpleRng::new(12345)))
        .expect("default config is valid")
}

fn bench_advance(c: &mut Criterion) {
    let mut engine = new_engine();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            engine.advance(black_box(TICK_MS));
            if engine.game_over() {
                engine.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(ShapeKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut engine = new_engine();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            engine.move_left();
            engine.move_right()
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = new_engine();

    c.bench_function("rotate", |b| {
        b.iter(|| engine.rotate())
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = new_engine();
    let mut snapshot = engine.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| engine.snapshot_into(black_box(&mut snapshot)))
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
