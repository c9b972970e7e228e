//! Piece counting and the end-of-game result.

use crate::{Board, Player};
use derive_more::Display;

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
pub enum Outcome {
    #[display("{_0} wins")]
    Win(Player),
    #[display("Tie")]
    Tie,
}

impl Outcome {
    /// The winning player, or `None` for a tie.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Tie => None,
        }
    }
}

/// Count the squares occupied by `player`.
#[inline]
pub fn score(board: Board, player: Player) -> u8 {
    board.pieces(player).count_occupied()
}

/// Score a board as: # `player` pieces - # opponent pieces.
#[inline]
pub fn score_difference(board: Board, player: Player) -> i8 {
    score(board, player) as i8 - score(board, !player) as i8
}

/// Whoever holds more pieces wins; equal counts tie.
pub fn winner(board: Board) -> Outcome {
    match score_difference(board, Player::Black) {
        d if d > 0 => Outcome::Win(Player::Black),
        d if d < 0 => Outcome::Win(Player::White),
        _ => Outcome::Tie,
    }
}
