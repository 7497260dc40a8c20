//! A reduced chess rules engine.
//!
//! The engine covers board representation, pseudo-legal and legal move
//! generation, check, checkmate and stalemate detection, and move
//! application with automatic promotion to a queen. Castling, en passant
//! and draw rules other than stalemate are not part of the rule set.
//!
//! Every rule operation is a function from a [`Board`] value to a new
//! [`Board`] or a derived fact. Nothing is mutated in place and nothing is
//! remembered between calls.
//!
//! # Examples
//!
//! Query legal destinations and play a move:
//!
//! ```
//! use gambit::{Board, Color, Square};
//!
//! let board = Board::new();
//! let targets = board.legal_moves_from(Square::E2);
//! assert!(targets.contains(Square::E4));
//!
//! let board = board.apply(Square::E2, Square::E4);
//! assert_eq!(board.legal_moves(Color::Black).len(), 20);
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! # use gambit::{Board, Color};
//! let board = Board::new();
//! assert!(!board.is_check(Color::White));
//! assert!(!board.is_checkmate(Color::White));
//! assert!(!board.is_stalemate(Color::White));
//! assert_eq!(board.termination(Color::White), None);
//! ```
//!
//! Let a seeded random mover answer:
//!
//! ```
//! # use gambit::{Board, Color};
//! use gambit::selector::RandomMover;
//!
//! let board = Board::new();
//! let mut mover = RandomMover::seed_from_u64(7);
//! let reply = mover.select(&board, Color::Black).expect("legal move");
//! let board = board.play(reply);
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html)
//!   for boards, pieces, moves and game sessions.
//! * `arbitrary`: Implements [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for vocabulary types and boards.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//! * `cli`: Builds the `selfplay` binary.

#![doc(html_root_url = "https://docs.rs/gambit/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod color;
mod m;
mod perft;
mod position;
mod role;
mod square;
mod types;

pub mod bitboard;
pub mod board;
pub mod game;
pub mod movegen;
pub mod selector;

pub use bitboard::Bitboard;
pub use board::Board;
pub use color::{ByColor, Color};
pub use m::{Move, MoveList, MAX_LEGAL_MOVES};
pub use perft::perft;
pub use position::{legal_moves, Termination};
pub use role::Role;
pub use square::{ParseSquareError, Square, SquareOutOfBounds};
pub use types::Piece;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
