#![no_main]

use arbitrary::Arbitrary;
use gambit::{legal_moves, Board, Color, Square};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    board: Board,
    square: Square,
    turn: Color,
}

fuzz_target!(|data: Data| {
    let board = data.board;

    if let Some(piece) = board.piece_at(data.square) {
        let pseudo = board.pseudo_legal_moves_from(data.square);
        let legal = legal_moves(&board, piece, data.square);
        assert_eq!(legal, board.legal_moves_from(data.square));

        for to in legal {
            assert!(pseudo.contains(to));
            assert_ne!(board.color_at(to), Some(piece.color));
            assert!(!board.apply(data.square, to).is_check(piece.color));
        }
    }

    let moves = board.legal_moves(data.turn);
    assert_eq!(moves.is_empty(), !board.has_legal_moves(data.turn));
    assert_eq!(moves.is_empty(), board.termination(data.turn).is_some());
    assert!(!(board.is_checkmate(data.turn) && board.is_stalemate(data.turn)));
});
