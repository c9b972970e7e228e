//! Interactive two-player game on a terminal.

use anyhow::{bail, Context, Result};
use othello_engine::{GameState, Location, MoveError};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Play an interactive Othello game, reading moves from `input` and drawing to `out`.
/// Returns the final state, or the state at the time the player typed "quit".
pub fn play_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    hints: bool,
) -> Result<GameState> {
    let mut game = GameState::new();

    while let Some(player) = game.side_to_move() {
        writeln!(out, "\n{}\n", game)?;
        if hints {
            writeln!(out, "Legal moves: {}", game.legal_moves())?;
        }
        write!(out, "{} move: ", player)?;
        out.flush()?;

        let mut input_line = String::new();
        if input.read_line(&mut input_line).context("reading move")? == 0 {
            bail!("input closed before the game finished");
        }

        let entry = input_line.trim();
        if entry.eq_ignore_ascii_case("quit") {
            debug!("player quit");
            return Ok(game);
        }

        let loc: Location = match entry.parse() {
            Ok(loc) => loc,
            Err(_) => {
                writeln!(out, "Cannot parse move {:?}. Enter a square like D3.", entry)?;
                continue;
            }
        };

        match game.play(loc) {
            Ok(next) => game = next,
            Err(MoveError::IllegalMove { .. }) => {
                writeln!(out, "Invalid move. Legal moves: {}", game.legal_moves())?;
            }
            Err(err) => {
                warn!(%err, "unexpected move error");
                return Err(err.into());
            }
        }
    }

    writeln!(out, "\n{}\n", game)?;
    match game.winner().and_then(|outcome| outcome.winner()) {
        Some(winner) => writeln!(out, "Winner: {}.", winner)?,
        None => writeln!(out, "Draw.")?,
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_engine::Player;
    use std::io::Cursor;

    fn run(moves: &str, hints: bool) -> (Result<GameState>, String) {
        let mut out = Vec::new();
        let result = play_interactive(Cursor::new(moves.to_string()), &mut out, hints);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quit_returns_current_state() {
        let (result, _) = run("F5\nquit\n", false);
        let game = result.unwrap();
        assert_eq!(game.side_to_move(), Some(Player::White));
        assert_eq!(game.score(Player::Black), 4);
    }

    #[test]
    fn illegal_move_reprompts_same_player() {
        let (result, output) = run("A1\nquit\n", false);
        assert_eq!(result.unwrap(), GameState::new());
        assert!(output.contains("Invalid move. Legal moves: [D3, C4, F5, E6]"));
        assert_eq!(output.matches("Black move: ").count(), 2);
    }

    #[test]
    fn unparseable_input_is_reported() {
        let (_, output) = run("hello\nquit\n", false);
        assert!(output.contains("Cannot parse move \"hello\""));
    }

    #[test]
    fn hints_list_legal_moves() {
        let (_, output) = run("quit\n", true);
        assert!(output.contains("Legal moves: [D3, C4, F5, E6]"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = run("F5\n", false);
        assert!(result.is_err());
    }

    #[test]
    fn finished_game_announces_winner() {
        // Black wipes out White in nine moves.
        let (result, output) = run("D3\nC3\nB3\nD2\nE1\nD6\nD7\nE3\nF4\n", false);
        let game = result.unwrap();
        assert!(game.is_terminal());
        assert_eq!(game.score(Player::Black), 13);
        assert_eq!(game.score(Player::White), 0);
        assert!(output.contains("Winner: Black."));
    }
}
