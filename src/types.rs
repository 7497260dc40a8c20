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

use crate::{color::Color, role::Role};

/// A piece with [`Color`], [`Role`] and a flag recording whether it has
/// ever moved.
///
/// The `moved` flag is maintained by [`Board::apply()`](crate::Board::apply)
/// but no rule depends on it.
///
/// With the `serde` feature a piece is stored as
/// `{"color": "white", "type": "pawn", "has_moved": false}`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: Color,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub role: Role,
    #[cfg_attr(feature = "serde", serde(rename = "has_moved", default))]
    pub moved: bool,
}

impl Piece {
    /// Uppercase letter for white, lowercase for black.
    pub fn char(self) -> char {
        self.color.fold(self.role.upper_char(), self.role.char())
    }

    /// Checks color and role, ignoring the moved flag.
    #[inline]
    pub fn is(self, color: Color, role: Role) -> bool {
        self.color == color && self.role == role
    }

    #[must_use]
    pub(crate) fn into_moved(self) -> Piece {
        Piece {
            moved: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_char() {
        assert_eq!(Color::White.queen().char(), 'Q');
        assert_eq!(Color::Black.knight().char(), 'n');
    }

    #[test]
    fn test_is_ignores_moved() {
        let moved = Color::White.rook().into_moved();
        assert!(moved.moved);
        assert!(moved.is(Color::White, Role::Rook));
        assert_ne!(moved, Color::White.rook());
    }
}
