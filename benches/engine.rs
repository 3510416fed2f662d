use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridfall::engine::State;
use gridfall::types::{Action, Axis, BlockColor, CANVAS_HEIGHT, CELL_HEIGHT, CELL_WIDTH, GRID_WIDTH};

fn started(seed: u32) -> State {
    State::new(seed).apply(Action::Tick { time_ms: 0 })
}

fn bench_tick(c: &mut Criterion) {
    let state = started(12345);
    c.bench_function("tick_with_ghost_projection", |b| {
        b.iter(|| black_box(state.clone()).apply(Action::Tick { time_ms: 16 }))
    });
}

fn bench_move(c: &mut Criterion) {
    let state = started(12345);
    c.bench_function("move_one_cell", |b| {
        b.iter(|| {
            black_box(state.clone()).apply(Action::Move {
                axis: Axis::X,
                offset: CELL_WIDTH,
            })
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let state = started(12345);
    c.bench_function("rotate_with_kick_search", |b| {
        b.iter(|| black_box(state.clone()).apply(Action::Rotate))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    // A settled piece over four full bottom rows, ready to resolve.
    let mut state = started(12345);
    for row in 0..4 {
        let y = CANVAS_HEIGHT - (row + 1) * CELL_HEIGHT;
        for col in 0..GRID_WIDTH {
            state.blocks.push(gridfall::engine::Cell {
                id: 1_000 + (row * GRID_WIDTH + col) as u32,
                x: col * CELL_WIDTH,
                y,
                color: BlockColor::Cyan,
            });
        }
    }
    let piece = *state.current.as_ref().unwrap();
    let lowest = piece.cells.iter().map(|c| c.y).max().unwrap();
    state.current = Some(gridfall::engine::Piece {
        collided: true,
        ..piece.shifted(CANVAS_HEIGHT - CELL_HEIGHT - lowest, Axis::Y)
    });

    c.bench_function("resolve_full_rows", |b| {
        b.iter(|| black_box(state.clone()).apply(Action::Tick { time_ms: 16 }))
    });
}

fn bench_full_game_fold(c: &mut Criterion) {
    let mut script = vec![Action::Tick { time_ms: 0 }];
    for i in 0..10 {
        let offset = if i % 2 == 0 { -CELL_WIDTH } else { CELL_WIDTH };
        script.push(Action::Move {
            axis: Axis::X,
            offset,
        });
        script.push(Action::Rotate);
        script.push(Action::Drop);
        script.push(Action::Tick { time_ms: 16 * i });
    }

    c.bench_function("fold_ten_piece_script", |b| {
        b.iter(|| {
            let mut state = State::new(black_box(777));
            for &action in &script {
                if state.game_end {
                    break;
                }
                state = state.apply(action);
            }
            state
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_move,
    bench_rotate,
    bench_line_clear,
    bench_full_game_fold
);
criterion_main!(benches);
