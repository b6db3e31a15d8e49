use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_chompers::core::{generate_equation, generate_grid, is_correct, NullSink, Session};
use math_chompers::term::{GameView, Viewport};
use math_chompers::types::{Direction, Mode};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_grids(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);

    c.bench_function("grid_multiples", |b| {
        b.iter(|| generate_grid(Mode::Multiples, black_box(3), &mut rng))
    });
    c.bench_function("grid_equality", |b| {
        b.iter(|| generate_grid(Mode::Equality, black_box(7), &mut rng))
    });
    c.bench_function("grid_inequality", |b| {
        b.iter(|| generate_grid(Mode::Inequality, black_box(7), &mut rng))
    });
}

fn bench_rare_target(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);

    // 144 only comes from 12 * 12.
    c.bench_function("equation_rare_target", |b| {
        b.iter(|| generate_equation(black_box(144), true, &mut rng))
    });
}

fn bench_select(c: &mut Criterion) {
    let rng = ChaCha8Rng::seed_from_u64(12345);
    let mut session = Session::new(Mode::Equality, 7, rng, NullSink).unwrap();

    c.bench_function("select_cell", |b| {
        b.iter(|| {
            let _ = session.select_cell();
        })
    });

    let cell = session.current_cell();
    c.bench_function("is_correct_expression", |b| {
        b.iter(|| is_correct(Mode::Equality, black_box(&cell), 7))
    });
}

fn bench_render(c: &mut Criterion) {
    let rng = ChaCha8Rng::seed_from_u64(12345);
    let mut session = Session::new(Mode::Inequality, 5, rng, NullSink).unwrap();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = view.render(&session.snapshot(), vp);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            session.move_cursor(Direction::Left);
            session.move_cursor(Direction::Right);
            view.render_into(black_box(&session.snapshot()), vp, &mut fb);
        })
    });
}

criterion_group!(benches, bench_grids, bench_rare_target, bench_select, bench_render);
criterion_main!(benches);
