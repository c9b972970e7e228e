//! "Perft" performance test: count the number of leaves at a given depth.
//! Passes are taken automatically by [`GameState`], so each ply is a placement;
//! finished games count as leaves. Up to depth 8 no pass is possible and the
//! counts match the classic tables.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::GameState;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(GameState::new(), depth)
}

fn leaves_below(game: GameState, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 || game.is_terminal() {
        return 1;
    }

    game.legal_moves()
        .filter_map(|mv| game.play(mv).ok())
        .map(|next| leaves_below(next, depth - 1))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}
