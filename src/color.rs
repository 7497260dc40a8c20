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

use std::{fmt, ops};

use crate::{role::Role, types::Piece};

/// `White` or `Black`.
///
/// White starts on row 7 and moves towards row 0, black starts on row 0
/// and moves towards row 7.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    #[inline]
    pub fn fold<T>(self, white: T, black: T) -> T {
        match self {
            Color::White => white,
            Color::Black => black,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub fn forward(self) -> i32 {
        self.fold(-1, 1)
    }

    /// Row holding the pieces of this color in the initial position.
    #[inline]
    pub fn backrank(self) -> u8 {
        self.fold(7, 0)
    }

    /// Row from which pawns of this color may advance two squares.
    #[inline]
    pub fn pawn_row(self) -> u8 {
        self.fold(6, 1)
    }

    /// Row on which pawns of this color promote, i.e. the opponent's
    /// backrank.
    #[inline]
    pub fn promotion_row(self) -> u8 {
        (!self).backrank()
    }

    #[inline]
    pub fn pawn(self) -> Piece {
        Role::Pawn.of(self)
    }
    #[inline]
    pub fn knight(self) -> Piece {
        Role::Knight.of(self)
    }
    #[inline]
    pub fn bishop(self) -> Piece {
        Role::Bishop.of(self)
    }
    #[inline]
    pub fn rook(self) -> Piece {
        Role::Rook.of(self)
    }
    #[inline]
    pub fn queen(self) -> Piece {
        Role::Queen.of(self)
    }
    #[inline]
    pub fn king(self) -> Piece {
        Role::King.of(self)
    }

    /// `White` and `Black`, in this order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];
}

impl ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.fold(Color::Black, Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold("white", "black"))
    }
}

/// Container with values for each [`Color`].
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash)]
pub struct ByColor<T> {
    pub white: T,
    pub black: T,
}

impl<T> ByColor<T> {
    #[inline]
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.promotion_row(), 7);
        assert_eq!(Color::White.pawn_row(), 6);
        assert_eq!(Color::Black.pawn_row(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
        assert_eq!(!Color::White, Color::Black);
    }

    #[test]
    fn test_by_color() {
        let mut counts = ByColor::<u32>::default();
        *counts.get_mut(Color::White) += 10;
        *counts.get_mut(Color::Black) += 1;
        assert_eq!(counts, ByColor { white: 10, black: 1 });
    }
}
