//! Text rendering shared by the board types.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Column labels, in board order.
pub(crate) const COLUMN_LABELS: &str = "ABCDEFGH";

/// Format 64 characters into an 8x8 grid with algebraic row and column labels.
/// `cells` must yield exactly 64 items in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(mut cells: T, f: &mut Formatter) -> fmt::Result {
    write!(f, " ")?;
    for label in COLUMN_LABELS.chars() {
        write!(f, " {}", label)?;
    }

    for row in 0..EDGE_LENGTH {
        write!(f, "\n{}", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", cells.next().ok_or(fmt::Error)?)?;
        }
    }

    match cells.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}
