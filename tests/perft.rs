use gambit::{perft, Board, Color, Square};

#[test]
#[cfg_attr(miri, ignore)]
fn test_initial_perft() {
    let board = Board::new();
    assert_eq!(perft(&board, Color::White, 1), 20);
    assert_eq!(perft(&board, Color::White, 2), 400);
    assert_eq!(perft(&board, Color::White, 3), 8_902);
    assert_eq!(perft(&board, Color::White, 4), 197_281);
}

#[test]
fn test_after_e4_perft() {
    let board = Board::new().apply(Square::E2, Square::E4);
    assert_eq!(perft(&board, Color::Black, 1), 20);
}

#[test]
fn test_promotion_perft() {
    let mut board = Board::empty();
    board.set_piece_at(Square::A1, Color::White.king());
    board.set_piece_at(Square::B7, Color::White.pawn());
    board.set_piece_at(Square::H8, Color::Black.king());

    // b8=Q plus three king moves. Under-promotion is never generated.
    assert_eq!(perft(&board, Color::White, 1), 4);
}
