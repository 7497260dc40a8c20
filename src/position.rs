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

use std::fmt;

use crate::{
    bitboard::Bitboard,
    board::Board,
    color::Color,
    m::{Move, MoveList},
    movegen::{attacks, pseudo_legal_moves},
    role::Role,
    square::Square,
    types::Piece,
};

/// How a game ended for the side to move.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Termination {
    /// In check without any legal move. The other side wins.
    Checkmate,
    /// Not in check, but without any legal move. A draw.
    Stalemate,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
        })
    }
}

/// Legal destinations of `piece` standing on `sq`: the
/// [pseudo-legal](pseudo_legal_moves) destinations after which the own king
/// is not in check.
///
/// Every candidate is tried on a copy of the board.
///
/// # Examples
///
/// ```
/// use gambit::{legal_moves, movegen, Board, Color, Square};
///
/// // The bishop on e2 is pinned against its king by the rook on e8.
/// let mut board = Board::empty();
/// board.set_piece_at(Square::E1, Color::White.king());
/// board.set_piece_at(Square::E2, Color::White.bishop());
/// board.set_piece_at(Square::E8, Color::Black.rook());
///
/// let bishop = Color::White.bishop();
/// assert!(!movegen::pseudo_legal_moves(&board, bishop, Square::E2).is_empty());
/// assert!(legal_moves(&board, bishop, Square::E2).is_empty());
/// ```
pub fn legal_moves(board: &Board, piece: Piece, sq: Square) -> Bitboard {
    pseudo_legal_moves(board, piece, sq)
        .into_iter()
        .filter(|&to| !board.apply_piece(piece, sq, to).is_check(piece.color))
        .collect()
}

impl Board {
    /// Plays the piece on `from` to `to` and returns the resulting board.
    ///
    /// Whatever stood on `to` is captured. The moved piece is marked as
    /// moved, and a pawn reaching the opposite backrank becomes a queen.
    /// `self` is left untouched.
    ///
    /// Legality is not validated: callers must check that `to` is among
    /// the [legal destinations](Board::legal_moves_from) first. If `from`
    /// is empty, the board is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use gambit::{Board, Color, Square};
    ///
    /// let board = Board::new();
    /// let after = board.apply(Square::E2, Square::E4);
    ///
    /// assert_eq!(board.piece_at(Square::E4), None);
    /// assert_eq!(after.piece_at(Square::E2), None);
    /// assert!(after.piece_at(Square::E4).is_some_and(|p| p.moved));
    /// ```
    #[must_use]
    pub fn apply(&self, from: Square, to: Square) -> Board {
        match self.piece_at(from) {
            Some(piece) => self.apply_piece(piece, from, to),
            None => *self,
        }
    }

    /// Plays a move. See [`Board::apply()`].
    #[must_use]
    pub fn play(&self, m: Move) -> Board {
        self.apply(m.from, m.to)
    }

    fn apply_piece(&self, piece: Piece, from: Square, to: Square) -> Board {
        let mut board = *self;
        let mut piece = piece.into_moved();
        if piece.role == Role::Pawn && to.row() == piece.color.promotion_row() {
            piece.role = Role::Queen;
        }
        board.remove_piece_at(from);
        board.set_piece_at(to, piece);
        board
    }

    /// Checks if any piece of color `by` attacks `sq`.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.pieces()
            .filter(|(_, piece)| piece.color == by)
            .any(|(from, piece)| attacks(self, piece, from, sq))
    }

    /// Checks if the king of `color` is attacked. A board without a king of
    /// that color is never in check.
    pub fn is_check(&self, color: Color) -> bool {
        self.king_of(color)
            .is_some_and(|king| self.is_attacked(king, !color))
    }

    /// Legal destinations of the piece on `sq`, or the empty set if the
    /// square is empty.
    pub fn legal_moves_from(&self, sq: Square) -> Bitboard {
        self.piece_at(sq)
            .map_or(Bitboard::EMPTY, |piece| legal_moves(self, piece, sq))
    }

    /// All legal moves of `color`, ordered by origin square from `a8` to
    /// `h1`.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        self.legal_moves_iter(color).collect()
    }

    /// Iterates over the legal moves of `color` in the same order as
    /// [`Board::legal_moves()`], without collecting them.
    pub fn legal_moves_iter(&self, color: Color) -> impl Iterator<Item = Move> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.color == color)
            .flat_map(move |(from, piece)| {
                legal_moves(self, piece, from)
                    .into_iter()
                    .filter_map(move |to| Move::describe(self, from, to))
            })
    }

    /// Checks if any piece of `color` has a legal move.
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .any(|(from, piece)| !legal_moves(self, piece, from).is_empty())
    }

    /// Checks if `color` is in check and has no legal move.
    ///
    /// ```
    /// use gambit::{Board, Color, Square};
    ///
    /// // Fool's mate.
    /// let board = Board::new()
    ///     .apply(Square::F2, Square::F3)
    ///     .apply(Square::E7, Square::E5)
    ///     .apply(Square::G2, Square::G4)
    ///     .apply(Square::D8, Square::H4);
    ///
    /// assert!(board.is_checkmate(Color::White));
    /// assert!(!board.is_stalemate(Color::White));
    /// ```
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_check(color) && !self.has_legal_moves(color)
    }

    /// Checks if `color` is not in check but has no legal move.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_check(color) && !self.has_legal_moves(color)
    }

    /// Classifies the board for `color` as checkmate, stalemate, or `None`
    /// if `color` still has a legal move.
    pub fn termination(&self, color: Color) -> Option<Termination> {
        if self.has_legal_moves(color) {
            None
        } else if self.is_check(color) {
            Some(Termination::Checkmate)
        } else {
            Some(Termination::Stalemate)
        }
    }
}
