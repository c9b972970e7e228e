//! Capture resolution: which opponent pieces a placement flanks.
//!
//! Legality checks and move application both go through [`flanked_pieces`],
//! so a move is legal exactly when it would flip something.

use crate::{Bitboard, Board, Cell, Direction, Location, Player, EDGE_LENGTH};
use arrayvec::ArrayVec;

/// The opponent pieces flanked in one direction, ordered outward from the placement.
pub type Flank = ArrayVec<Location, { EDGE_LENGTH - 1 }>;

/// Walk from `loc` along `direction`, collecting opponent pieces until a piece
/// belonging to `player` closes the run.
///
/// Returns an empty run if the walk reaches an empty cell or the edge of the
/// board first. The cell at `loc` itself is not examined.
pub fn flanked_pieces(board: Board, player: Player, loc: Location, direction: Direction) -> Flank {
    let mut run = Flank::new();
    let mut cursor = loc.step(direction);

    while let Some(next) = cursor {
        match board.cell(next) {
            Cell::Occupied(owner) if owner == player => return run,
            Cell::Occupied(_) => run.push(next),
            Cell::Empty => break,
        }
        cursor = next.step(direction);
    }

    Flank::new()
}

/// Every opponent piece flipped by `player` placing at `loc`, over all directions.
pub fn captures(board: Board, player: Player, loc: Location) -> Bitboard {
    Direction::ALL
        .iter()
        .flat_map(|&direction| flanked_pieces(board, player, loc, direction))
        .fold(Bitboard::EMPTY, Bitboard::with)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Location {
        s.parse().unwrap()
    }

    #[test]
    fn opening_flank_is_single_piece() {
        // D3 flanks D4 (White) against D5 (Black).
        let run = flanked_pieces(Board::new(), Player::Black, at("D3"), Direction::South);
        assert_eq!(run.as_slice(), &[at("D4")]);
    }

    #[test]
    fn no_flank_toward_empty_cell() {
        let run = flanked_pieces(Board::new(), Player::Black, at("D3"), Direction::North);
        assert!(run.is_empty());
    }

    #[test]
    fn adjacent_own_piece_is_an_empty_flank() {
        // From C5, the neighbour to the east is D5 (Black): a closed run of length zero.
        let run = flanked_pieces(Board::new(), Player::Black, at("C5"), Direction::East);
        assert!(run.is_empty());
    }

    #[test]
    fn run_reaching_the_edge_is_not_a_flank() {
        let board: Board = "
            .OOOOOOO
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let run = flanked_pieces(board, Player::Black, at("A1"), Direction::East);
        assert!(run.is_empty());
    }

    #[test]
    fn long_run_is_ordered_outward() {
        let board: Board = "
            .OOOOOOX
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let run = flanked_pieces(board, Player::Black, at("A1"), Direction::East);
        let expected: Vec<Location> = ["B1", "C1", "D1", "E1", "F1", "G1"]
            .iter()
            .map(|s| at(s))
            .collect();
        assert_eq!(run.to_vec(), expected);
    }

    #[test]
    fn captures_union_every_direction() {
        let board: Board = "
            X.X.X...
            .OOO....
            XO.OX...
            .OOO....
            X.X.X...
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let flipped = captures(board, Player::Black, at("C3"));
        assert_eq!(flipped.count_occupied(), 8);
        for s in ["B2", "C2", "D2", "B3", "D3", "B4", "C4", "D4"] {
            assert!(flipped.contains(at(s)), "{} should be captured", s);
        }
    }

    #[test]
    fn captures_from_white_perspective() {
        let flipped = captures(Board::new(), Player::White, at("E3"));
        assert_eq!(flipped.count_occupied(), 1);
        assert!(flipped.contains(at("E4")));
    }
}
