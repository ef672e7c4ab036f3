use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sidebar_tetris::core::{collide, rotate_with_kicks, sweep, Board, EngineConfig, GameState};
use sidebar_tetris::types::{RotateDirection, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(EngineConfig::default()).unwrap();
    let mut now = 0u64;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now += 16;
            state.tick(black_box(now));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..DEFAULT_BOARD_WIDTH as i16 {
                    board.set(x, y, 5);
                }
            }
            black_box(sweep(&mut board));
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(EngineConfig::default()).unwrap();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn_piece();
        })
    });
}

fn bench_collide(c: &mut Criterion) {
    let state = GameState::new(EngineConfig::default()).unwrap();

    c.bench_function("collide", |b| {
        b.iter(|| black_box(collide(state.board(), black_box(state.active()))))
    });
}

fn bench_rotate_with_kicks(c: &mut Criterion) {
    let state = GameState::new(EngineConfig::default()).unwrap();
    let mut piece = state.active().clone();
    piece.x = -1;

    c.bench_function("rotate_with_kicks", |b| {
        b.iter(|| {
            rotate_with_kicks(state.board(), &mut piece, RotateDirection::Clockwise);
        })
    });
}

fn bench_render_state_into(c: &mut Criterion) {
    let state = GameState::new(EngineConfig::default()).unwrap();
    let mut out = state.render_state();

    c.bench_function("render_state_into", |b| {
        b.iter(|| {
            state.render_state_into(&mut out);
            black_box(&out);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_sweep,
    bench_piece_spawn,
    bench_collide,
    bench_rotate_with_kicks,
    bench_render_state_into
);
criterion_main!(benches);
