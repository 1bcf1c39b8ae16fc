use connectk::board::{Board, Player, Pos};
use connectk::search::Searcher;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_search(c: &mut Criterion) {
    c.bench_function("search_tic_tac_toe_empty", |ben| {
        ben.iter(|| {
            let mut board = Board::new(3, 3, 3);
            let mut searcher = Searcher::default();
            let r = searcher.search(black_box(&mut board));
            black_box(r.nodes)
        })
    });

    c.bench_function("search_4x4_k3_midgame", |ben| {
        ben.iter(|| {
            let mut board = Board::new(4, 4, 3);
            for (r, col) in [(1, 1), (2, 2), (0, 3)] {
                board.mark(Player::One, Pos::new(r, col));
            }
            for (r, col) in [(1, 2), (2, 1)] {
                board.mark(Player::Two, Pos::new(r, col));
            }
            let mut searcher = Searcher::default();
            let r = searcher.search(black_box(&mut board));
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
