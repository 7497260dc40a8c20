// This file is part of the gambit library.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Pseudo-legal move generation.
//!
//! Destinations are computed by walking the mailbox board. They respect
//! movement patterns and occupancy but ignore whether the mover's own king
//! ends up attacked; see [`legal_moves()`](crate::legal_moves) for that.
//!
//! # Examples
//!
//! ```
//! use gambit::{movegen, Board, Color, Square};
//!
//! let board = Board::new();
//! let knight = Color::White.knight();
//! let targets = movegen::pseudo_legal_moves(&board, knight, Square::G1);
//! assert_eq!(targets.into_iter().collect::<Vec<_>>(), [Square::F3, Square::H3]);
//! ```

use crate::{
    bitboard::Bitboard,
    board::Board,
    role::Role,
    square::Square,
    types::Piece,
};

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];
const KING_OFFSETS: [(i32, i32); 8] = QUEEN_DIRECTIONS;

/// Destinations reachable by `piece` standing on `sq`, ignoring the safety
/// of its own king.
///
/// The board is not consulted for `sq` itself, so `piece` does not have to
/// be the piece actually standing there.
pub fn pseudo_legal_moves(board: &Board, piece: Piece, sq: Square) -> Bitboard {
    match piece.role {
        Role::Pawn => pawn_moves(board, piece, sq),
        Role::Knight => stepping_moves(board, piece, sq, &KNIGHT_OFFSETS),
        Role::Bishop => sliding_moves(board, piece, sq, &BISHOP_DIRECTIONS),
        Role::Rook => sliding_moves(board, piece, sq, &ROOK_DIRECTIONS),
        Role::Queen => sliding_moves(board, piece, sq, &QUEEN_DIRECTIONS),
        Role::King => stepping_moves(board, piece, sq, &KING_OFFSETS),
    }
}

/// Checks if `piece` on `sq` attacks `target`, i.e. could capture a piece
/// of the opposite color standing there.
pub fn attacks(board: &Board, piece: Piece, sq: Square, target: Square) -> bool {
    pseudo_legal_moves(board, piece, sq).contains(target)
}

fn is_enemy(board: &Board, piece: Piece, sq: Square) -> bool {
    board
        .color_at(sq)
        .is_some_and(|color| color != piece.color)
}

fn pawn_moves(board: &Board, piece: Piece, sq: Square) -> Bitboard {
    let mut moves = Bitboard::EMPTY;
    let forward = piece.color.forward();

    if let Some(single) = sq.offset(forward, 0) {
        if board.piece_at(single).is_none() {
            moves.add(single);

            if sq.row() == piece.color.pawn_row() {
                if let Some(double) = single.offset(forward, 0) {
                    if board.piece_at(double).is_none() {
                        moves.add(double);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = sq.offset(forward, dc) {
            if is_enemy(board, piece, to) {
                moves.add(to);
            }
        }
    }

    moves
}

fn sliding_moves(board: &Board, piece: Piece, sq: Square, directions: &[(i32, i32)]) -> Bitboard {
    let mut moves = Bitboard::EMPTY;

    for &(dr, dc) in directions {
        let mut cursor = sq;
        while let Some(to) = cursor.offset(dr, dc) {
            match board.color_at(to) {
                None => moves.add(to),
                Some(color) => {
                    if color != piece.color {
                        moves.add(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }

    moves
}

fn stepping_moves(board: &Board, piece: Piece, sq: Square, offsets: &[(i32, i32)]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| sq.offset(dr, dc))
        .filter(|&to| board.color_at(to) != Some(piece.color))
        .collect()
}

impl Board {
    /// Pseudo-legal destinations of the piece on `sq`, or the empty set if
    /// the square is empty.
    pub fn pseudo_legal_moves_from(&self, sq: Square) -> Bitboard {
        self.piece_at(sq)
            .map_or(Bitboard::EMPTY, |piece| pseudo_legal_moves(self, piece, sq))
    }
}
