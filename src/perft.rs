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

use crate::{board::Board, color::Color};

/// Counts legal move paths of a given length, starting with `turn` to move.
///
/// Paths with mate or stalemate are not counted unless it occurs in the
/// final position. Useful for comparing, testing and debugging move
/// generation correctness.
///
/// Castling and en passant cannot occur in the first four plies of a game,
/// so the counts from the initial position agree with standard chess up to
/// depth 4.
///
/// # Examples
///
/// ```
/// use gambit::{perft, Board, Color};
///
/// let board = Board::new();
/// assert_eq!(perft(&board, Color::White, 1), 20);
/// assert_eq!(perft(&board, Color::White, 2), 400);
/// ```
pub fn perft(board: &Board, turn: Color, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    let moves = board.legal_moves(turn);

    if depth == 1 {
        moves.len() as u64
    } else {
        moves
            .iter()
            .map(|&m| perft(&board.play(m), !turn, depth - 1))
            .sum()
    }
}
