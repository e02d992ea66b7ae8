use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::term::{GameView, Viewport};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.toggle_autopilot();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            black_box(state.tick());
            if state.game_over() {
                state.reset();
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.toggle_autopilot();
    for _ in 0..50 {
        state.tick();
    }
    let snap = state.snapshot();
    let mut view = GameView::default();
    let scores = [40u32, 30, 20, 10, 5];

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            black_box(view.render(&snap, &scores, Viewport::new(100, 30)));
        })
    });
}

criterion_group!(benches, bench_tick, bench_snapshot, bench_render);
criterion_main!(benches);
