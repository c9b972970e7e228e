//! `othello`: a terminal front end for `othello-engine`.
//!
//! - `othello play` - two players at one keyboard
//! - `othello replay F5 D6 C3` - replay a game and print the final position
//! - `othello perft 6` - count reachable positions

mod cli;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use othello_engine::test_utils::{play_transcript, run_perft};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter {directives:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { hints } => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            play::play_interactive(stdin.lock(), stdout.lock(), hints)?;
        }
        Command::Replay { moves } => {
            let transcript = moves.join(" ");
            info!(%transcript, "replaying");
            let game = play_transcript(&transcript).context("replay failed")?;
            println!("{}", game);
        }
        Command::Perft { depth } => {
            info!(depth, "running perft");
            println!("{}", run_perft(depth));
        }
    }

    Ok(())
}
