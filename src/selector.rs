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

//! Random move selection.
//!
//! The random source is always supplied by the caller, so independent games
//! never share generator state and tests can pin outcomes with a seed.
//!
//! # Examples
//!
//! ```
//! use gambit::{selector::RandomMover, Board, Color};
//!
//! let board = Board::new();
//! let mut mover = RandomMover::seed_from_u64(42);
//! let m = mover.select(&board, Color::White).expect("white can move");
//! assert!(board.legal_moves_from(m.from).contains(m.to));
//! ```

use rand::{rngs::StdRng, seq::IteratorRandom as _, Rng, SeedableRng};
use tracing::trace;

use crate::{board::Board, color::Color, m::Move};

/// Picks one of the legal moves of `color` uniformly at random.
///
/// Returns `None` if `color` has no legal move, which happens exactly when
/// it is checkmated or stalemated.
pub fn select_move<R>(board: &Board, color: Color, rng: &mut R) -> Option<Move>
where
    R: Rng + ?Sized,
{
    let choice = board.legal_moves_iter(color).choose(rng);
    trace!(%color, choice = ?choice, "selected random move");
    choice
}

/// A random mover that owns its generator.
#[derive(Debug, Clone)]
pub struct RandomMover<R = StdRng> {
    rng: R,
}

impl RandomMover<StdRng> {
    /// Creates a mover with a reproducible [`StdRng`].
    pub fn seed_from_u64(seed: u64) -> RandomMover<StdRng> {
        RandomMover::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMover<R> {
    pub fn new(rng: R) -> RandomMover<R> {
        RandomMover { rng }
    }

    /// See [`select_move()`].
    pub fn select(&mut self, board: &Board, color: Color) -> Option<Move> {
        select_move(board, color, &mut self.rng)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
