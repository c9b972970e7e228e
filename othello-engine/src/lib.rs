//! `othello-engine` is the rules engine for Othello (Reversi): legal moves,
//! captures, turn order, passing, the end of the game and scoring.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains packed sets of board locations. Each player's
//!    pieces, and the set of legal moves, are [`Bitboard`]s.
//!  - [`Board`] and [`capture`] implement the move validator and capture
//!    resolver for a single position, without any notion of whose turn it is.
//!  - [`GameState`] is the safe, complete interface to a game: it tracks the
//!    side to move, skips a player with no legal move, and detects the end of
//!    the game.
//!
//! Every type is a small `Copy` value. Making a move returns a new state and
//! never changes the one it was called on:
//!
//! ```
//! use othello_engine::{new_game, MoveError, Player};
//!
//! let game = new_game();
//! let next = game.apply_move(2, 3).unwrap(); // D3
//! assert_eq!(next.side_to_move(), Some(Player::White));
//! assert_eq!(game.side_to_move(), Some(Player::Black));
//!
//! assert!(matches!(next.apply_move(0, 0), Err(MoveError::IllegalMove { .. })));
//! ```
//!
//! The engine performs no I/O. Transitions are reported through [`tracing`]
//! spans and events, which are discarded unless the caller installs a subscriber.

pub mod bitboard;
pub mod capture;
pub mod score;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use bitboard::Bitboard;
pub use board::*;
pub use game::*;
pub use location::*;
pub use score::Outcome;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;

/// Start a new game from the standard position, Black to move.
pub fn new_game() -> GameState {
    GameState::new()
}
