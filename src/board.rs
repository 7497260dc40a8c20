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

//! Piece positions on a board.

use std::fmt::{self, Write as _};

use crate::{
    color::{ByColor, Color},
    role::Role,
    square::Square,
    types::Piece,
};

/// [`Piece`] positions on a board.
///
/// A board is a plain value: it is `Copy`, and every rule operation takes a
/// board by reference and hands back a new one.
///
/// # Examples
///
/// ```
/// use gambit::{Board, Color, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
///
/// assert_eq!(board.to_string(), concat!(
///     "r n b q k b n r\n",
///     "p p p p p p p p\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     "P P P P P P P P\n",
///     "R N B Q K B N R\n",
/// ));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Board {
    squares: [Option<Piece>; 64],
}

const BACKRANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

impl Board {
    /// The standard starting position. All pieces are unmoved.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, role) in (0..8).zip(BACKRANK) {
                board.set_piece_at(Square::new(color.backrank(), col), role.of(color));
                board.set_piece_at(Square::new(color.pawn_row(), col), color.pawn());
            }
        }
        board
    }

    /// A board without any pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role)
    }

    /// Puts a piece on a square, replacing whatever was there.
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Finds the first king of `color`, scanning from `a8` to `h1`.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(color, Role::King))
            .map(|(sq, _)| sq)
    }

    /// Iterates over all pieces and their squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Number of pieces of each color.
    pub fn count_by_color(&self) -> ByColor<usize> {
        let mut counts = ByColor::<usize>::default();
        for (_, piece) in self.pieces() {
            *counts.get_mut(piece.color) += 1;
        }
        counts
    }

    /// The board as 8 rows of 8 squares, row 0 first.
    pub fn rows(&self) -> [[Option<Piece>; 8]; 8] {
        let mut rows = [[None; 8]; 8];
        for (sq, piece) in self.pieces() {
            rows[usize::from(sq.row())][usize::from(sq.col())] = Some(piece);
        }
        rows
    }

    pub fn from_rows(rows: [[Option<Piece>; 8]; 8]) -> Board {
        let mut board = Board::empty();
        for sq in Square::all() {
            if let Some(piece) = rows[usize::from(sq.row())][usize::from(sq.col())] {
                board.set_piece_at(sq, piece);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::all() {
            f.write_char(self.piece_at(sq).map_or('.', Piece::char))?;
            f.write_char(if sq.col() < 7 { ' ' } else { '\n' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.rows(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Board, D::Error> {
        let rows: [[Option<Piece>; 8]; 8] = serde::Deserialize::deserialize(deserializer)?;
        Ok(Board::from_rows(rows))
    }
}
