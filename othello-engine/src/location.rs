//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::utils::COLUMN_LABELS;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A location on the Othello board, stored as a row-major index.
///
/// Every `Location` is on the board: the only ways to build one from raw
/// coordinates are checked.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location(u8);

/// A list of locations on the Othello board, which can be iterated to retrieve them
/// in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

/// Raw coordinates that fall outside the 8x8 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("coordinate ({row}, {col}) is off the board")]
pub struct InvalidCoordinate {
    pub row: usize,
    pub col: usize,
}

/// One of the eight compass directions a capture can run in.
/// Rows grow downward, so [`Direction::North`] decreases the row.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every direction, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (row, col) step taken when moving one cell in this direction.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl Location {
    /// Convert from row and column coordinates.
    pub fn from_coords(row: usize, col: usize) -> Result<Self, InvalidCoordinate> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(InvalidCoordinate { row, col });
        }
        Ok(Self((row * EDGE_LENGTH + col) as u8))
    }

    /// Convert from a row-major square index (0 is A1, 63 is H8).
    #[inline]
    pub(crate) fn from_index(index: u8) -> Self {
        debug_assert!((index as usize) < NUM_SPACES);
        Self(index)
    }

    /// Convert into a row-major square index (0 is A1, 63 is H8).
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    #[inline]
    pub fn row(self) -> usize {
        self.0 as usize / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.0 as usize % EDGE_LENGTH
    }

    /// The one-hot [`Bitboard`] for this location.
    #[inline]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::from(1u64 << (NUM_SPACES as u8 - 1 - self.0))
    }

    /// The neighbouring location in `direction`, or `None` past the edge.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Self::from_coords(row, col).ok()
    }

    /// Every location on the board, in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Self)
    }
}

/// Convert this [`Location`] into string notation ("D3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_LABELS.chars().nth(self.col()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", self.row() + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("D3").
/// The column letter is case-insensitive.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).map_err(|_| ParseLocationError)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0.contains(loc)
    }

    /// Returns whether the list is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(iter.into_iter().fold(Bitboard::EMPTY, Bitboard::with))
    }
}

impl ExactSizeIterator for LocationList {}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        self.0.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "[{}]", string)
    }
}
