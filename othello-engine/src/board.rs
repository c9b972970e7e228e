//! The board value and the move validator.
//!
//! A [`Board`] is a pair of bitboards, one per player. It is `Copy`, and every
//! operation that changes it returns a new board instead.

use crate::bitboard::{Bitboard, BLACK_START, WHITE_START};
use crate::capture::{captures, flanked_pieces};
use crate::{utils, Direction, Location, LocationList, Player, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of one square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::Black) => 'X',
            Cell::Occupied(Player::White) => 'O',
        }
    }
}

/// A pair of bitboards storing every piece on the board.
/// The two bitboards never overlap.
///
/// Pieces are only placed by a legal move through [`GameState`]; raw
/// placement is not part of the public interface:
///
/// ```compile_fail
/// use othello_engine::{Board, Location, Player};
/// let loc: Location = "D4".parse().unwrap();
/// let _ = Board::new().make_move(Player::Black, loc);
/// ```
///
/// [`GameState`]: crate::GameState
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: White on D4 and E5, Black on E4 and D5.
    pub const fn new() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
        }
    }

    /// A board with no pieces.
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
        }
    }

    /// Get the contents of `loc`.
    #[inline]
    pub fn cell(self, loc: Location) -> Cell {
        if self.black.contains(loc) {
            Cell::Occupied(Player::Black)
        } else if self.white.contains(loc) {
            Cell::Occupied(Player::White)
        } else {
            Cell::Empty
        }
    }

    /// A copy of this board with `loc` overwritten by `cell`.
    pub fn with_cell(self, loc: Location, cell: Cell) -> Self {
        let black = self.black.without(loc);
        let white = self.white.without(loc);
        match cell {
            Cell::Empty => Self { black, white },
            Cell::Occupied(Player::Black) => Self {
                black: black.with(loc),
                white,
            },
            Cell::Occupied(Player::White) => Self {
                black,
                white: white.with(loc),
            },
        }
    }

    /// Get a mask of `player`'s pieces.
    #[inline]
    pub fn pieces(self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied(self) -> Bitboard {
        self.black | self.white
    }

    /// Get a mask indicating where the empty spaces are.
    #[inline]
    pub fn empties(self) -> Bitboard {
        !self.occupied()
    }

    /// Returns whether `player` may place a piece at `loc`: the square must be
    /// empty and flank at least one run of opponent pieces.
    pub fn is_legal(self, player: Player, loc: Location) -> bool {
        if self.occupied().contains(loc) {
            return false;
        }

        Direction::ALL
            .iter()
            .any(|&direction| !flanked_pieces(self, player, loc, direction).is_empty())
    }

    /// Get the list of legal moves for `player`.
    pub fn legal_moves(self, player: Player) -> LocationList {
        Location::all()
            .filter(|&loc| self.is_legal(player, loc))
            .collect()
    }

    /// Returns whether `player` has any legal move.
    pub fn has_legal_move(self, player: Player) -> bool {
        Location::all().any(|loc| self.is_legal(player, loc))
    }

    /// Place `player`'s piece at `loc` and flip every flanked opponent piece.
    /// Does not check legality; callers go through [`GameState::play`].
    ///
    /// [`GameState::play`]: crate::GameState::play
    pub(crate) fn make_move(self, player: Player, loc: Location) -> Self {
        let flipped = captures(self, player, loc);
        let mover = self.pieces(player) | flipped | loc.bitboard();
        let opponent = self.pieces(!player) ^ flipped;

        match player {
            Player::Black => Self {
                black: mover,
                white: opponent,
            },
            Player::White => Self {
                black: opponent,
                white: mover,
            },
        }
    }

    fn cells(self) -> impl Iterator<Item = Cell> {
        Location::all().map(move |loc| self.cell(loc))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(Cell::to_char), f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display("unexpected character {_0:?} in board string")]
    UnexpectedCharacter(#[error(not(source))] char),
    #[display("expected 64 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

/// Parse a board from 64 cell characters in row-major order.
/// `X`, `x` or `*` is Black, `O` or `o` is White, `-` or `.` is empty.
/// Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut count = 0;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                'X' | 'x' | '*' => Cell::Occupied(Player::Black),
                'O' | 'o' => Cell::Occupied(Player::White),
                '-' | '.' => Cell::Empty,
                other => return Err(ParseBoardError::UnexpectedCharacter(other)),
            };

            if count < NUM_SPACES {
                board = board.with_cell(Location::from_index(count as u8), cell);
            }
            count += 1;
        }

        if count != NUM_SPACES {
            return Err(ParseBoardError::WrongCellCount(count));
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Location {
        s.parse().unwrap()
    }

    #[test]
    fn starting_layout() {
        let board = Board::new();
        assert_eq!(board.occupied().count_occupied(), 4);
        assert_eq!(board.cell(at("D4")), Cell::Occupied(Player::White));
        assert_eq!(board.cell(at("E5")), Cell::Occupied(Player::White));
        assert_eq!(board.cell(at("E4")), Cell::Occupied(Player::Black));
        assert_eq!(board.cell(at("D5")), Cell::Occupied(Player::Black));
        assert_eq!(board.cell(at("A1")), Cell::Empty);
    }

    #[test]
    fn opening_moves() {
        let moves = Board::new().legal_moves(Player::Black);
        assert_eq!(moves.to_string(), "[D3, C4, F5, E6]");

        let moves = Board::new().legal_moves(Player::White);
        assert_eq!(moves.to_string(), "[E3, F4, C5, D6]");
    }

    #[test]
    fn occupied_squares_are_never_legal() {
        let board = Board::new();
        for loc in LocationList::from(board.occupied()) {
            assert!(!board.is_legal(Player::Black, loc));
            assert!(!board.is_legal(Player::White, loc));
        }
    }

    #[test]
    fn make_move_flips_flanked_piece() {
        let board = Board::new().make_move(Player::Black, at("D3"));
        assert_eq!(board.cell(at("D3")), Cell::Occupied(Player::Black));
        assert_eq!(board.cell(at("D4")), Cell::Occupied(Player::Black));
        assert_eq!(board.pieces(Player::Black).count_occupied(), 4);
        assert_eq!(board.pieces(Player::White).count_occupied(), 1);
    }

    #[test]
    fn with_cell_replaces_owner() {
        let loc = at("D4");
        let board = Board::new().with_cell(loc, Cell::Occupied(Player::Black));
        assert_eq!(board.cell(loc), Cell::Occupied(Player::Black));
        assert!((board.pieces(Player::Black) & board.pieces(Player::White)).is_empty());

        let board = board.with_cell(loc, Cell::Empty);
        assert_eq!(board.cell(loc), Cell::Empty);
        assert_eq!(board.occupied().count_occupied(), 3);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let board = Board::new().make_move(Player::Black, at("F5"));
        let rendered = board.to_string();
        let cells: String = rendered
            .lines()
            .skip(1)
            .flat_map(|line| line.split_whitespace().skip(1))
            .collect();
        assert_eq!(cells.parse::<Board>(), Ok(board));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "X".repeat(63).parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(63))
        );
        assert_eq!(
            "X".repeat(65).parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(65))
        );
        let mut bad = ".".repeat(63);
        bad.push('Z');
        assert_eq!(
            bad.parse::<Board>(),
            Err(ParseBoardError::UnexpectedCharacter('Z'))
        );
    }
}
