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

use std::{error::Error, fmt, str::FromStr};

/// A square of the 8x8 board, addressed by row and column.
///
/// Row 0 is black's backrank and row 7 is white's backrank. Columns run
/// from the a-file (0) to the h-file (7), so `a8` is `(0, 0)` and `h1` is
/// `(7, 7)`.
///
/// # Examples
///
/// ```
/// use gambit::Square;
///
/// let sq = Square::new(6, 4);
/// assert_eq!(sq, Square::E2);
/// assert_eq!(sq.to_string(), "e2");
/// assert_eq!("e2".parse::<Square>().ok(), Some(sq));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    /// Creates a square from signed coordinates, or `None` if they are off
    /// the board.
    #[inline]
    pub fn from_coords(row: i32, col: i32) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn from_index(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 & 7
    }

    /// Index in `0..64`, row major.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The square `dr` rows and `dc` columns away, or `None` when that
    /// leaves the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        Square::from_coords(i32::from(self.row()) + dr, i32::from(self.col()) + dc)
    }

    /// All 64 squares, row by row starting at `a8`.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64).map(Square)
    }

    pub fn file_char(self) -> char {
        char::from(b'a' + self.col())
    }

    pub fn rank_char(self) -> char {
        char::from(b'8' - self.row())
    }
}

macro_rules! square_consts {
    ($($name:ident = $row:expr, $col:expr;)+) => {
        impl Square {
            $(pub const $name: Square = Square::new($row, $col);)+
        }
    }
}

square_consts! {
    A8 = 0, 0;
    B8 = 0, 1;
    C8 = 0, 2;
    D8 = 0, 3;
    E8 = 0, 4;
    F8 = 0, 5;
    G8 = 0, 6;
    H8 = 0, 7;
    A7 = 1, 0;
    B7 = 1, 1;
    C7 = 1, 2;
    D7 = 1, 3;
    E7 = 1, 4;
    F7 = 1, 5;
    G7 = 1, 6;
    H7 = 1, 7;
    A6 = 2, 0;
    B6 = 2, 1;
    C6 = 2, 2;
    D6 = 2, 3;
    E6 = 2, 4;
    F6 = 2, 5;
    G6 = 2, 6;
    H6 = 2, 7;
    A5 = 3, 0;
    B5 = 3, 1;
    C5 = 3, 2;
    D5 = 3, 3;
    E5 = 3, 4;
    F5 = 3, 5;
    G5 = 3, 6;
    H5 = 3, 7;
    A4 = 4, 0;
    B4 = 4, 1;
    C4 = 4, 2;
    D4 = 4, 3;
    E4 = 4, 4;
    F4 = 4, 5;
    G4 = 4, 6;
    H4 = 4, 7;
    A3 = 5, 0;
    B3 = 5, 1;
    C3 = 5, 2;
    D3 = 5, 3;
    E3 = 5, 4;
    F3 = 5, 5;
    G3 = 5, 6;
    H3 = 5, 7;
    A2 = 6, 0;
    B2 = 6, 1;
    C2 = 6, 2;
    D2 = 6, 3;
    E2 = 6, 4;
    F2 = 6, 5;
    G2 = 6, 6;
    H2 = 6, 7;
    A1 = 7, 0;
    B1 = 7, 1;
    C1 = 7, 2;
    D1 = 7, 3;
    E1 = 7, 4;
    F1 = 7, 5;
    G1 = 7, 6;
    H1 = 7, 7;
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.file_char().to_ascii_uppercase(),
            self.rank_char()
        )
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        match *s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Square::new(b'8' - rank, file - b'a')),
            _ => Err(ParseSquareError),
        }
    }
}

/// Error when coordinates are off the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SquareOutOfBounds {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for SquareOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "square ({}, {}) is off the board", self.row, self.col)
    }
}

impl Error for SquareOutOfBounds {}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareOutOfBounds;

    fn try_from((row, col): (usize, usize)) -> Result<Square, SquareOutOfBounds> {
        if row < 8 && col < 8 {
            Ok(Square::new(row as u8, col as u8))
        } else {
            Err(SquareOutOfBounds { row, col })
        }
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Square> {
        u.int_in_range(0..=63).map(Square)
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (1, Some(1))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&(self.row(), self.col()), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Square, D::Error> {
        let (row, col): (usize, usize) = serde::Deserialize::deserialize(deserializer)?;
        Square::try_from((row, col)).map_err(serde::de::Error::custom)
    }
}
