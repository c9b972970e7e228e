//! Implements game-level Othello logic: players, turn order, passing and the
//! end of the game.
//!
//! [`GameState`] is the safe interface to the rules. It is a small `Copy`
//! value; every move returns a new state and leaves the caller's untouched.

use crate::score::{self, Outcome};
use crate::{Board, InvalidCoordinate, Location, LocationList};
use derive_more::{Display, Error, From};
use std::fmt;
use tracing::{debug, instrument, trace};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Player {
    #[display("Black")]
    Black,
    #[display("White")]
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// Where a game stands: waiting on a player, or finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    AwaitingMove(Player),
    Terminal(Outcome),
}

/// Errors that can occur when making a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The coordinates are not on the board.
    #[display("{_0}")]
    #[from]
    InvalidCoordinate(#[error(not(source))] InvalidCoordinate),
    /// The square is occupied or flanks nothing. The game is unchanged and the
    /// same player should try again.
    #[display("{player} cannot play {location}")]
    IllegalMove { player: Player, location: Location },
    /// The game has already finished.
    #[display("the game is already over")]
    GameAlreadyOver,
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    status: Status,
    just_passed: bool,
}

impl Default for GameState {
    /// Gets the starting position with Black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard starting position with Black to move.
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            status: Status::AwaitingMove(Player::Black),
            just_passed: false,
        }
    }

    /// Build a state from an arbitrary position with `to_move` on turn.
    ///
    /// Passing is resolved immediately: if `to_move` has no legal move the
    /// opponent moves instead, and if neither can move the game is over.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        Self::settle(board, to_move)
    }

    /// Pick who moves next on `board`, preferring `next`. Falls back to the
    /// other player (a pass), or ends the game when nobody can move.
    fn settle(board: Board, next: Player) -> Self {
        let (status, just_passed) = if board.has_legal_move(next) {
            (Status::AwaitingMove(next), false)
        } else if board.has_legal_move(!next) {
            debug!(skipped = %next, "no legal move; turn stays with {}", !next);
            (Status::AwaitingMove(!next), true)
        } else {
            let outcome = score::winner(board);
            debug!(
                %outcome,
                black = score::score(board, Player::Black),
                white = score::score(board, Player::White),
                "game over"
            );
            (Status::Terminal(outcome), false)
        };

        Self {
            board,
            status,
            just_passed,
        }
    }

    /// Place a piece for the side to move at raw (row, col) coordinates.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(self, row: usize, col: usize) -> Result<Self, MoveError> {
        let loc = Location::from_coords(row, col)?;
        self.play(loc)
    }

    /// Place a piece for the side to move at `loc`.
    ///
    /// On success the captured pieces are flipped and the turn passes to the
    /// opponent, unless the opponent has no legal move, in which case the
    /// mover goes again. When neither side can move the returned state is
    /// terminal.
    #[instrument(level = "debug", skip(self), fields(player = ?self.side_to_move()))]
    pub fn play(self, loc: Location) -> Result<Self, MoveError> {
        let player = match self.status {
            Status::Terminal(_) => return Err(MoveError::GameAlreadyOver),
            Status::AwaitingMove(player) => player,
        };

        if !self.board.is_legal(player, loc) {
            return Err(MoveError::IllegalMove {
                player,
                location: loc,
            });
        }

        let board = self.board.make_move(player, loc);
        trace!(
            flipped = score::score(board, player) - score::score(self.board, player) - 1,
            "move applied"
        );

        Ok(Self::settle(board, !player))
    }

    /// Get the list of legal moves for the side to move. Empty once the game is over.
    pub fn legal_moves(self) -> LocationList {
        match self.status {
            Status::AwaitingMove(player) => self.board.legal_moves(player),
            Status::Terminal(_) => LocationList::default(),
        }
    }

    #[inline]
    pub fn board(self) -> Board {
        self.board
    }

    #[inline]
    pub fn status(self) -> Status {
        self.status
    }

    /// The player on turn, or `None` once the game is over.
    #[inline]
    pub fn side_to_move(self) -> Option<Player> {
        match self.status {
            Status::AwaitingMove(player) => Some(player),
            Status::Terminal(_) => None,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self.status, Status::Terminal(_))
    }

    /// The result of the game, or `None` while it is still being played.
    #[inline]
    pub fn winner(self) -> Option<Outcome> {
        match self.status {
            Status::Terminal(outcome) => Some(outcome),
            Status::AwaitingMove(_) => None,
        }
    }

    /// Whether the move that produced this state skipped the opponent's turn.
    #[inline]
    pub fn just_passed(self) -> bool {
        self.just_passed
    }

    /// Count the squares occupied by `player`.
    #[inline]
    pub fn score(self, player: Player) -> u8 {
        score::score(self.board, player)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        let black = self.score(Player::Black);
        let white = self.score(Player::White);
        match self.status {
            Status::AwaitingMove(player) => {
                if self.just_passed {
                    writeln!(f, "({} has no legal move and passes)", !player)?;
                }
                write!(f, "{} to move (X {} - O {})", player, black, white)
            }
            Status::Terminal(outcome) => {
                write!(f, "Game over: {} (X {} - O {})", outcome, black, white)
            }
        }
    }
}
