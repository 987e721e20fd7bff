use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hexsweeper_core::{Board, GameConfig, GameSession, HexCoord};

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::new(32, 0.2).unwrap();
    c.bench_function("generate_radius_32", |b| {
        b.iter(|| GameSession::new(black_box(config), black_box(7)))
    });
}

fn bench_cascade(c: &mut Criterion) {
    // a lone corner mine makes the opening reveal flood nearly the whole board
    c.bench_function("cascade_radius_32", |b| {
        b.iter_batched(
            || {
                let board = Board::with_mines(32, &[HexCoord::new(32, 0)]).unwrap();
                GameSession::with_board(board, 7)
            },
            |mut session| black_box(session.reveal(HexCoord::new(0, 0)).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_cascade);
criterion_main!(benches);
