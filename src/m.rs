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

use std::fmt::{self, Write as _};

use arrayvec::ArrayVec;

use crate::{board::Board, role::Role, square::Square};

/// Information about a move.
///
/// Only `from` and `to` are needed to [apply](Board::apply) a move. The
/// other fields describe the move in the context of the board it was
/// generated from.
///
/// # Display
///
/// `Move` implements [`Display`](fmt::Display) using long algebraic
/// notation, e.g. `e2-e4`, `Qh5xf7` or `b7-b8=Q`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub role: Role,
    pub from: Square,
    pub capture: Option<Role>,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl Move {
    /// Describes moving the piece on `from` to `to`, or `None` if `from` is
    /// empty. Legality is not checked.
    ///
    /// ```
    /// use gambit::{Board, Move, Role, Square};
    ///
    /// let m = Move::describe(&Board::new(), Square::G1, Square::F3).unwrap();
    /// assert_eq!(m.role, Role::Knight);
    /// assert_eq!(m.to_string(), "Ng1-f3");
    /// ```
    pub fn describe(board: &Board, from: Square, to: Square) -> Option<Move> {
        board.piece_at(from).map(|piece| Move {
            role: piece.role,
            from,
            capture: board.role_at(to),
            to,
            promotion: (piece.role == Role::Pawn && to.row() == piece.color.promotion_row())
                .then_some(Role::Queen),
        })
    }

    /// Checks if the move is a capture.
    pub const fn is_capture(self) -> bool {
        self.capture.is_some()
    }

    /// Checks if the move is a promotion.
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.role != Role::Pawn {
            f.write_char(self.role.upper_char())?;
        }

        write!(
            f,
            "{}{}{}",
            self.from,
            if self.is_capture() { 'x' } else { '-' },
            self.to
        )?;

        if let Some(p) = self.promotion {
            write!(f, "={}", p.upper_char())?;
        }

        Ok(())
    }
}

/// Upper bound on the number of legal moves of one side on any board.
///
/// A side with `n` pieces has at most 27 destinations per piece (a queen in
/// the center) and at most `64 - n` squares not occupied by its own pieces,
/// so it has at most `n * min(27, 64 - n) <= 999` moves.
pub const MAX_LEGAL_MOVES: usize = 1024;

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is [`MAX_LEGAL_MOVES`], enough for every board that can be
/// built, including boards that cannot arise in play.
///
/// # Example
///
/// ```
/// use gambit::{Board, Color, Role};
///
/// let board = Board::new();
/// let mut moves = board.legal_moves(Color::White);
/// moves.retain(|m| m.role == Role::Pawn);
/// assert_eq!(moves.len(), 16);
/// ```
pub type MoveList = ArrayVec<Move, MAX_LEGAL_MOVES>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_display() {
        let mut board = Board::empty();
        board.set_piece_at(Square::B7, Color::White.pawn());
        board.set_piece_at(Square::C8, Color::Black.rook());
        board.set_piece_at(Square::H5, Color::White.queen());
        board.set_piece_at(Square::F7, Color::Black.pawn());

        let push = Move::describe(&board, Square::B7, Square::B8).unwrap();
        assert!(push.is_promotion());
        assert_eq!(push.to_string(), "b7-b8=Q");

        let capture = Move::describe(&board, Square::B7, Square::C8).unwrap();
        assert_eq!(capture.capture, Some(Role::Rook));
        assert_eq!(capture.to_string(), "b7xc8=Q");

        let queen = Move::describe(&board, Square::H5, Square::F7).unwrap();
        assert_eq!(queen.to_string(), "Qh5xf7");
        assert!(!queen.is_promotion());

        assert_eq!(Move::describe(&board, Square::A1, Square::A2), None);
    }
}
