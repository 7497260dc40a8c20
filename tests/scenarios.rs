use gambit::{
    game::{Game, GameStatus, PlayError},
    perft,
    selector::{select_move, RandomMover},
    Board, Color, Role, Square, Termination,
};
use rand::{rngs::StdRng, SeedableRng};

fn play_all(game: &mut Game, moves: &[(Square, Square)]) {
    for &(from, to) in moves {
        if let Err(err) = game.play(from, to) {
            panic!("{from}-{to} rejected: {err}\n{}", game.board());
        }
    }
}

#[test]
fn test_scholars_mate() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            (Square::E2, Square::E4),
            (Square::E7, Square::E5),
            (Square::F1, Square::C4),
            (Square::B8, Square::C6),
            (Square::D1, Square::H5),
            (Square::G8, Square::F6),
        ],
    );
    assert!(game.status().is_active());

    let m = game.play(Square::H5, Square::F7).expect("Qxf7 is legal");
    assert_eq!(m.role, Role::Queen);
    assert_eq!(m.capture, Some(Role::Pawn));

    assert!(game.board().is_checkmate(Color::Black));
    assert_eq!(
        game.board().termination(Color::Black),
        Some(Termination::Checkmate)
    );
    assert_eq!(game.status(), GameStatus::WhiteWon);
    assert_eq!(game.status().winner(), Some(Color::White));
    assert_eq!(
        game.play(Square::E8, Square::F7),
        Err(PlayError::GameOver)
    );

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(game.play_reply(&mut rng), None);
}

#[test]
fn test_rank_pin() {
    let mut board = Board::empty();
    board.set_piece_at(Square::A4, Color::White.king());
    board.set_piece_at(Square::D4, Color::White.rook());
    board.set_piece_at(Square::H4, Color::Black.rook());
    board.set_piece_at(Square::H8, Color::Black.king());

    let pseudo = board.pseudo_legal_moves_from(Square::D4);
    let legal = board.legal_moves_from(Square::D4);
    assert!(pseudo.contains(Square::D5));
    assert!(pseudo.contains(Square::D1));
    assert!(!legal.contains(Square::D5));
    assert!(!legal.contains(Square::D1));
    assert_eq!(
        legal.into_iter().collect::<Vec<_>>(),
        [
            Square::B4,
            Square::C4,
            Square::E4,
            Square::F4,
            Square::G4,
            Square::H4
        ]
    );
}

#[test]
fn test_stalemate_with_blocked_pawn() {
    let mut board = Board::empty();
    board.set_piece_at(Square::A8, Color::Black.king());
    board.set_piece_at(Square::A7, Color::Black.pawn());
    board.set_piece_at(Square::A6, Color::White.pawn());
    board.set_piece_at(Square::C7, Color::White.king());

    assert!(!board.is_check(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert!(board.legal_moves(Color::Black).is_empty());

    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(select_move(&board, Color::Black, &mut rng), None);

    let game = Game::from_parts(board, Color::Black, GameStatus::Draw);
    assert!(game.is_over());
}

#[test]
fn test_stalemate_ends_session_in_draw() {
    // Qf7-g6 stalemates the king on h8.
    let mut board = Board::empty();
    board.set_piece_at(Square::H8, Color::Black.king());
    board.set_piece_at(Square::F6, Color::White.king());
    board.set_piece_at(Square::F7, Color::White.queen());

    let mut game = Game::from_parts(board, Color::White, GameStatus::Active);
    game.play(Square::F7, Square::G6).expect("Qg6 is legal");
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().winner(), None);
}

#[test]
fn test_promotion_through_session() {
    let mut board = Board::empty();
    board.set_piece_at(Square::A1, Color::White.king());
    board.set_piece_at(Square::G7, Color::White.pawn());
    board.set_piece_at(Square::H8, Color::Black.rook());
    board.set_piece_at(Square::C6, Color::Black.king());

    let mut game = Game::from_parts(board, Color::White, GameStatus::Active);
    let m = game.play(Square::G7, Square::H8).expect("gxh8 is legal");
    assert_eq!(m.capture, Some(Role::Rook));
    assert_eq!(m.promotion, Some(Role::Queen));
    assert_eq!(m.to_string(), "g7xh8=Q");

    let piece = game.board().piece_at(Square::H8).expect("promoted piece");
    assert!(piece.is(Color::White, Role::Queen));
    assert!(piece.moved);
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn test_pawn_double_step() {
    let board = Board::new();
    let targets = board.legal_moves_from(Square::D2);
    assert_eq!(
        targets.into_iter().collect::<Vec<_>>(),
        [Square::D4, Square::D3]
    );

    // A pawn that already left its start row only steps once.
    let board = board.apply(Square::D2, Square::D3);
    assert_eq!(
        board.legal_moves_from(Square::D3).into_iter().collect::<Vec<_>>(),
        [Square::D4]
    );

    // The double step needs both squares empty.
    let mut board = Board::new();
    board.set_piece_at(Square::E3, Color::Black.knight());
    assert!(board.legal_moves_from(Square::E2).is_empty());
}

#[test]
fn test_rejected_moves_leave_session_untouched() {
    let mut game = Game::new();
    let before = *game.board();

    assert_eq!(game.play(Square::E4, Square::E5), Err(PlayError::NoPiece));
    assert_eq!(game.play(Square::E7, Square::E5), Err(PlayError::NotYourTurn));
    assert_eq!(game.play(Square::E2, Square::E5), Err(PlayError::IllegalMove));
    assert_eq!(game.play(Square::E1, Square::E2), Err(PlayError::IllegalMove));

    assert_eq!(*game.board(), before);
    assert_eq!(game.turn(), Color::White);
    assert!(game.status().is_active());
}

#[test]
fn test_forced_single_reply() {
    let mut board = Board::empty();
    board.set_piece_at(Square::A8, Color::Black.king());
    board.set_piece_at(Square::B7, Color::White.queen());
    board.set_piece_at(Square::H1, Color::White.king());

    for seed in 0..16 {
        let mut mover = RandomMover::seed_from_u64(seed);
        let m = mover.select(&board, Color::Black).expect("Kxb7");
        assert_eq!((m.from, m.to), (Square::A8, Square::B7));
    }
}

#[test]
fn test_play_against() {
    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(99);
    let exchange = game
        .play_against(Square::G1, Square::F3, &mut rng)
        .expect("Nf3 is legal");

    let reply = exchange.reply.expect("black answers");
    assert_eq!(game.board().color_at(reply.to), Some(Color::Black));
    assert_eq!(exchange.status, GameStatus::Active);
    assert!(!exchange.in_check);
    assert_eq!(game.turn(), Color::White);
}

fn crowded_board() -> Board {
    let rows = [
        "kQBRQQQQ", "R......Q", ".QQ....Q", ".Q.....Q", ".Q.....Q", "..Q....Q", "Q......Q",
        ".QQQQQQK",
    ];
    let mut board = Board::empty();
    for (row, line) in (0..8).zip(rows) {
        for (col, ch) in (0..8).zip(line.chars()) {
            let piece = match ch {
                'k' => Color::Black.king(),
                'K' => Color::White.king(),
                'Q' => Color::White.queen(),
                'R' => Color::White.rook(),
                'B' => Color::White.bishop(),
                _ => continue,
            };
            board.set_piece_at(Square::new(row, col), piece);
        }
    }
    board
}

#[test]
fn test_random_move_on_crowded_board() {
    let board = crowded_board();
    assert_eq!(perft(&board, Color::White, 1), 259);

    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let m = select_move(&board, Color::White, &mut rng).expect("white can move");
        assert!(board.legal_moves_from(m.from).contains(m.to));
    }

    let mut game = Game::from_parts(board, Color::White, GameStatus::Active);
    let mut rng = StdRng::seed_from_u64(1);
    let m = game.play_reply(&mut rng).expect("white can move");
    assert_eq!(game.board().color_at(m.to), Some(Color::White));
    assert_eq!(game.turn(), Color::Black);
}
