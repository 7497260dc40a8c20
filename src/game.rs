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

//! A game session: a board, the side to move and the game status.
//!
//! [`Game`] is the checked counterpart of the [`Board`] rule functions. It
//! rejects moves that are illegal, made out of turn, or made after the game
//! has ended, and keeps the status up to date after every accepted move.
//!
//! # Examples
//!
//! ```
//! use gambit::{game::{Game, GameStatus, PlayError}, Square};
//!
//! let mut game = Game::new();
//! assert_eq!(game.play(Square::E7, Square::E5), Err(PlayError::NotYourTurn));
//!
//! for (from, to) in [
//!     (Square::F2, Square::F3),
//!     (Square::E7, Square::E5),
//!     (Square::G2, Square::G4),
//!     (Square::D8, Square::H4),
//! ] {
//!     game.play(from, to)?;
//! }
//!
//! assert_eq!(game.status(), GameStatus::BlackWon);
//! assert_eq!(game.play(Square::E1, Square::F2), Err(PlayError::GameOver));
//! # Ok::<_, PlayError>(())
//! ```

use std::{error::Error, fmt};

use rand::Rng;
use tracing::{debug, info};

use crate::{
    bitboard::Bitboard,
    board::Board,
    color::Color,
    m::Move,
    position::Termination,
    selector::select_move,
    square::Square,
};

/// Status of a [`Game`]. Every status other than `Active` is final.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    #[default]
    Active,
    WhiteWon,
    BlackWon,
    Draw,
}

impl GameStatus {
    pub const fn is_active(self) -> bool {
        matches!(self, GameStatus::Active)
    }

    /// The status after `winner` delivered checkmate.
    pub const fn won_by(winner: Color) -> GameStatus {
        match winner {
            Color::White => GameStatus::WhiteWon,
            Color::Black => GameStatus::BlackWon,
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::WhiteWon => Some(Color::White),
            GameStatus::BlackWon => Some(Color::Black),
            GameStatus::Active | GameStatus::Draw => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            GameStatus::Active => "active",
            GameStatus::WhiteWon => "white_won",
            GameStatus::BlackWon => "black_won",
            GameStatus::Draw => "draw",
        })
    }
}

/// Error when a move is rejected by [`Game::play()`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum PlayError {
    /// The game has already ended.
    GameOver,
    /// There is no piece on the origin square.
    NoPiece,
    /// The piece on the origin square belongs to the side not to move.
    NotYourTurn,
    /// The destination is not a legal destination of the piece.
    IllegalMove,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            PlayError::GameOver => "game is already over",
            PlayError::NoPiece => "no piece on origin square",
            PlayError::NotYourTurn => "not your piece",
            PlayError::IllegalMove => "illegal move",
        })
    }
}

impl Error for PlayError {}

/// The result of [`Game::play_against()`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exchange {
    /// The reply of the random mover, if the game continued after the
    /// player's move.
    pub reply: Option<Move>,
    pub status: GameStatus,
    /// Whether the player is in check after the reply.
    pub in_check: bool,
}

/// A game session.
///
/// Starts from the initial position with white to move. The status changes
/// from [`GameStatus::Active`] exactly once, after which no further moves
/// are accepted.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    pub fn new() -> Game {
        Game {
            board: Board::new(),
            turn: Color::White,
            status: GameStatus::Active,
        }
    }

    /// Restores a session, e.g. from persisted state. The parts are taken
    /// as they are.
    pub fn from_parts(board: Board, turn: Color, status: GameStatus) -> Game {
        Game {
            board,
            turn,
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        !self.status.is_active()
    }

    /// Checks if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.is_check(self.turn)
    }

    /// Legal destinations of the piece on `sq`. Empty if the game is over,
    /// the square is empty, or the piece belongs to the side not to move.
    pub fn legal_moves(&self, sq: Square) -> Bitboard {
        if self.is_over() || self.board.color_at(sq) != Some(self.turn) {
            Bitboard::EMPTY
        } else {
            self.board.legal_moves_from(sq)
        }
    }

    /// Validates and plays a move for the side to move, then passes the
    /// turn.
    ///
    /// If the move checkmates the opponent, the mover wins. If it
    /// stalemates the opponent, the game is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the game is over, `from` holds no piece of
    /// the side to move, or `to` is not a legal destination. The session is
    /// unchanged in that case.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        let piece = self.board.piece_at(from).ok_or(PlayError::NoPiece)?;
        if piece.color != self.turn {
            return Err(PlayError::NotYourTurn);
        }
        if !self.board.legal_moves_from(from).contains(to) {
            return Err(PlayError::IllegalMove);
        }

        let m = Move::describe(&self.board, from, to).ok_or(PlayError::NoPiece)?;
        self.commit(m);
        Ok(m)
    }

    fn commit(&mut self, m: Move) {
        let mover = self.turn;
        self.board = self.board.play(m);
        self.turn = !mover;
        debug!(color = %mover, %m, "move played");

        self.status = match self.board.termination(self.turn) {
            Some(Termination::Checkmate) => GameStatus::won_by(mover),
            Some(Termination::Stalemate) => GameStatus::Draw,
            None => GameStatus::Active,
        };

        if self.is_over() {
            info!(status = %self.status, "game over");
        }
    }

    /// Plays a random legal move for the side to move.
    ///
    /// Returns `None` without touching the session if the game is over.
    pub fn play_reply<R>(&mut self, rng: &mut R) -> Option<Move>
    where
        R: Rng + ?Sized,
    {
        if self.is_over() {
            return None;
        }
        // An active game always has a legal move for the side to move.
        let m = select_move(&self.board, self.turn, rng)?;
        self.commit(m);
        Some(m)
    }

    /// Plays a move for the side to move and, if the game goes on, a random
    /// reply for the opponent.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play()`]. No reply is made if the move is rejected.
    pub fn play_against<R>(
        &mut self,
        from: Square,
        to: Square,
        rng: &mut R,
    ) -> Result<Exchange, PlayError>
    where
        R: Rng + ?Sized,
    {
        self.play(from, to)?;
        let reply = self.play_reply(rng);
        Ok(Exchange {
            reply,
            status: self.status,
            in_check: self.status.is_active() && self.is_check(),
        })
    }

    /// Abandons an active game as a draw. Finished games keep their status.
    pub fn abandon(&mut self) {
        if !self.is_over() {
            self.status = GameStatus::Draw;
            info!("game abandoned");
        }
    }
}
