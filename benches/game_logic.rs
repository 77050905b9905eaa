use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match_qube::core::{FixedPicker, Picker, Session};
use match_qube::engine::{Game, OrthoPicker, TracingAudio};
use match_qube::term::{CubeView, FrameBuffer, Hud, Viewport};
use match_qube::types::{Pointer, GRID_CELLS};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::with_seed(12345);
    session.start();
    let picker = FixedPicker::default();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if !session.running() {
                session.start();
            }
            session.tick(black_box(16), &picker);
            session.drain_events();
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("fill_cube", |b| {
        b.iter(|| {
            let mut session = Session::with_seed(7);
            for _ in 0..GRID_CELLS {
                black_box(session.spawn());
            }
        })
    });
}

fn bench_pick(c: &mut Criterion) {
    let mut session = Session::with_seed(3);
    for _ in 0..GRID_CELLS {
        session.spawn();
    }
    let picker = OrthoPicker::default();

    c.bench_function("ortho_pick", |b| {
        b.iter(|| {
            let hits = picker.pick(black_box(Pointer::new(0.1, -0.2)), session.grid());
            black_box(hits.len());
        })
    });
}

fn bench_host_frame(c: &mut Criterion) {
    let mut game = Game::new(Session::with_seed(9), TracingAudio);
    let mut now = 0u64;

    c.bench_function("host_frame", |b| {
        b.iter(|| {
            if !game.session().running() {
                game.start();
            }
            now += 16;
            game.frame(16, now);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut session = Session::with_seed(5);
    for _ in 0..GRID_CELLS / 2 {
        session.spawn();
    }
    let snap = session.snapshot();
    let view = CubeView::default();
    let hud = Hud {
        facing: Default::default(),
        status: None,
    };
    let mut fb = FrameBuffer::new(100, 30);

    c.bench_function("render_cube_view", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), &hud, Viewport::new(100, 30), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_spawn,
    bench_pick,
    bench_host_frame,
    bench_render
);
criterion_main!(benches);
