//! Replay games written as move lists in algebraic notation.
//!
//! Both `"F5 D6 C3"` and the compact `"f5d6c3"` form are accepted; commas
//! and whitespace between moves are ignored. Passes are never written, since
//! [`GameState`] takes them automatically.

use crate::{GameState, Location, MoveError};
use derive_more::{Display, Error};

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum TranscriptError {
    /// Ply `ply` (0-based) is not a location.
    #[display("move {}: cannot parse {token:?}", ply + 1)]
    BadNotation {
        ply: usize,
        token: String,
    },
    /// Ply `ply` (0-based) was rejected by the rules.
    #[display("move {}: {source}", ply + 1)]
    BadMove { ply: usize, source: MoveError },
}

/// Play `transcript` from the starting position, stopping at the first bad move.
pub fn play_transcript(transcript: &str) -> Result<GameState, TranscriptError> {
    let chars: Vec<char> = transcript
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    chars
        .chunks(2)
        .enumerate()
        .try_fold(GameState::new(), |game, (ply, chunk)| {
            let token: String = chunk.iter().collect();
            let loc: Location = token
                .parse()
                .map_err(|_| TranscriptError::BadNotation { ply, token })?;
            game.play(loc)
                .map_err(|source| TranscriptError::BadMove { ply, source })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn empty_transcript_is_the_start() {
        assert_eq!(play_transcript(""), Ok(GameState::new()));
    }

    #[test]
    fn separators_are_ignored() {
        let spaced = play_transcript("F5 D6, C3").unwrap();
        let compact = play_transcript("f5d6c3").unwrap();
        assert_eq!(spaced, compact);
        assert_eq!(compact.side_to_move(), Some(Player::White));
    }

    #[test]
    fn reports_bad_notation() {
        assert_eq!(
            play_transcript("F5 Z9"),
            Err(TranscriptError::BadNotation {
                ply: 1,
                token: "Z9".to_string(),
            })
        );
        assert!(matches!(
            play_transcript("F5D"),
            Err(TranscriptError::BadNotation { ply: 1, .. })
        ));
    }

    #[test]
    fn reports_illegal_move() {
        let err = play_transcript("F5 F5").unwrap_err();
        assert_eq!(
            err,
            TranscriptError::BadMove {
                ply: 1,
                source: MoveError::IllegalMove {
                    player: Player::White,
                    location: "F5".parse().unwrap(),
                },
            }
        );
        assert_eq!(err.to_string(), "move 2: White cannot play F5");
    }
}
