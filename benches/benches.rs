use gambit::{perft, selector::RandomMover, Board, Color, Square};
use iai::black_box;

fn italian() -> Board {
    Board::new()
        .apply(Square::E2, Square::E4)
        .apply(Square::E7, Square::E5)
        .apply(Square::G1, Square::F3)
        .apply(Square::B8, Square::C6)
        .apply(Square::F1, Square::C4)
        .apply(Square::F8, Square::C5)
}

fn bench_shallow_perft() {
    let board = Board::new();
    assert_eq!(black_box(perft(black_box(&board), Color::White, 3)), 8_902);
}

fn bench_deep_perft() {
    let board = Board::new();
    assert_eq!(perft(black_box(&board), Color::White, 4), 197_281);
}

fn bench_generate_moves() {
    let board = italian();
    assert!(!black_box(&board).legal_moves(Color::White).is_empty());
}

fn bench_is_check() -> bool {
    black_box(italian()).is_check(Color::White)
}

fn bench_termination() {
    let board = Board::new()
        .apply(Square::F2, Square::F3)
        .apply(Square::E7, Square::E5)
        .apply(Square::G2, Square::G4)
        .apply(Square::D8, Square::H4);
    assert!(black_box(&board).termination(Color::White).is_some());
}

fn bench_random_game() -> Board {
    let mut mover = RandomMover::seed_from_u64(black_box(1));
    let mut board = Board::new();
    let mut turn = Color::White;
    for _ in 0..100 {
        match mover.select(&board, turn) {
            Some(m) => board = board.play(m),
            None => break,
        }
        turn = !turn;
    }
    board
}

iai::main!(
    bench_shallow_perft,
    bench_deep_perft,
    bench_generate_moves,
    bench_is_check,
    bench_termination,
    bench_random_game,
);
