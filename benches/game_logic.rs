use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marble_solitaire::core::Board;
use marble_solitaire::view::render;

fn bench_score(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("score_scan", |b| b.iter(|| black_box(&board).score()));
}

fn bench_game_over(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("game_over_scan", |b| {
        b.iter(|| black_box(&board).is_game_over())
    });

    let wide = Board::with_arm_thickness(9).unwrap();
    c.bench_function("game_over_scan_arm9", |b| {
        b.iter(|| black_box(&wide).is_game_over())
    });
}

fn bench_make_move(c: &mut Criterion) {
    c.bench_function("capturing_jump", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.make_move(black_box(2), black_box(4), 3, 3)
        })
    });
    c.bench_function("rejected_jump", |b| {
        let mut board = Board::new();
        b.iter(|| board.make_move(black_box(3), black_box(1), 3, 3))
    });
}

fn bench_render(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("render_text", |b| b.iter(|| render(black_box(&board))));
}

criterion_group!(
    benches,
    bench_score,
    bench_game_over,
    bench_make_move,
    bench_render
);
criterion_main!(benches);
