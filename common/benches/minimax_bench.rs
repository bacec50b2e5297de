use common::games::SessionRng;
use common::games::tictactoe::{
    Board, BotInput, Difficulty, Mark, Minimax, best_move, calculate_move,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_single_move_empty_board() {
    black_box(best_move(&Board::new(), Mark::X, Mark::X));
}

fn bench_single_move_mid_game() {
    let board = Board::parse("x.. .o. ..x").unwrap();
    black_box(best_move(&board, Mark::O, Mark::O));
}

fn bench_full_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::O;
    let mut rng = SessionRng::new(42);

    while !board.status().is_terminal() {
        let input = BotInput {
            board,
            current_mark,
        };
        let Some(idx) = calculate_move(&input, Difficulty::full_strength(), &mut rng)
            .map(|decision| decision.index())
        else {
            break;
        };
        board = board.apply(idx, current_mark).unwrap();
        current_mark = current_mark.opponent();
    }
}

fn bench_node_count() -> u64 {
    let mut search = Minimax::new(Mark::X);
    search.search(&Board::new(), Mark::X);
    search.nodes()
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.bench_function("node_count_empty", |b| b.iter(bench_node_count));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
