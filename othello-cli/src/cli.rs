//! Command-line interface for the terminal front end.

use clap::{Parser, Subcommand};

/// Play and inspect Othello games in the terminal
#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log filter, e.g. "debug" or "othello_engine=trace". Defaults to $RUST_LOG, then "warn".
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game, entering moves like "D3"
    Play {
        /// Show the legal moves at every prompt
        #[arg(long)]
        hints: bool,
    },

    /// Replay a move list ("F5 D6 C3" or "f5d6c3") and print the result
    Replay {
        /// Moves in algebraic notation
        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// Count the positions reachable in DEPTH moves from the start
    Perft {
        depth: u64,
    },
}
