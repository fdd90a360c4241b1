use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cyber_tetris::core::{BagRandomizer, Board, GameSnapshot, GameState};
use cyber_tetris::types::{PieceKind, FRAME_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut now = 0u64;

    c.bench_function("game_tick_frame", |b| {
        b.iter(|| {
            now += FRAME_MS as u64;
            if !state.is_running() {
                state.reset();
                state.start();
            }
            state.tick(black_box(now));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_lines());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop_and_respawn", |b| {
        b.iter(|| {
            if !state.is_running() {
                state.reset();
                state.start();
            }
            state.hard_drop();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut right = true;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            let moved = if right {
                state.move_right()
            } else {
                state.move_left()
            };
            if !moved {
                right = !right;
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.rotate_cw();
        })
    });
}

fn bench_bag(c: &mut Criterion) {
    let mut bag = BagRandomizer::seeded(12345);
    c.bench_function("bag_next_kind", |b| b.iter(|| black_box(bag.next_kind())));
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_try_rotate,
    bench_bag,
    bench_snapshot_into
);
criterion_main!(benches);
