#![cfg(feature = "serde")]

use gambit::{
    game::{Game, GameStatus},
    Board, Color, Square,
};
use serde_json::json;

#[test]
fn test_board_layout() {
    let value = serde_json::to_value(Board::new()).expect("serialize");
    let rows = value.as_array().expect("rows");
    assert_eq!(rows.len(), 8);
    assert_eq!(
        rows[7][4],
        json!({ "color": "white", "type": "king", "has_moved": false })
    );
    assert_eq!(
        rows[0][3],
        json!({ "color": "black", "type": "queen", "has_moved": false })
    );
    assert_eq!(rows[4][4], json!(null));
}

#[test]
fn test_board_roundtrip() {
    let board = Board::new()
        .apply(Square::E2, Square::E4)
        .apply(Square::D7, Square::D5)
        .apply(Square::E4, Square::D5);
    let s = serde_json::to_string(&board).expect("serialize");
    let back: Board = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(back, board);
    assert!(back.piece_at(Square::D5).is_some_and(|p| p.moved));
}

#[test]
fn test_has_moved_defaults_to_false() {
    let mut rows = vec![vec![json!(null); 8]; 8];
    rows[7][7] = json!({ "color": "white", "type": "king" });
    rows[0][0] = json!({ "color": "black", "type": "king" });
    let board: Board = serde_json::from_value(json!(rows)).expect("deserialize");
    assert_eq!(board.piece_at(Square::H1), Some(Color::White.king()));
    assert_eq!(board.piece_at(Square::A8), Some(Color::Black.king()));
}

#[test]
fn test_square() {
    assert_eq!(serde_json::to_value(Square::E2).expect("serialize"), json!([6, 4]));
    assert_eq!(
        serde_json::from_value::<Square>(json!([0, 7])).expect("deserialize"),
        Square::H8
    );
    assert!(serde_json::from_value::<Square>(json!([8, 0])).is_err());
}

#[test]
fn test_game_roundtrip() {
    let mut game = Game::new();
    game.play(Square::G1, Square::F3).expect("Nf3 is legal");

    let value = serde_json::to_value(&game).expect("serialize");
    assert_eq!(value["turn"], json!("black"));
    assert_eq!(value["status"], json!("active"));

    let back: Game = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back.board(), game.board());
    assert_eq!(back.turn(), Color::Black);
    assert_eq!(back.status(), GameStatus::Active);
}
