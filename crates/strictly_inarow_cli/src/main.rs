//! Strictly In-a-Row - terminal front end
//!
//! Two players share one terminal and type `row col` to place marks.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_inarow::Game;
use strictly_inarow_cli::{Cli, LineInput, Session, SessionError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = cli.game_config()?;
    info!(
        width = *config.width(),
        win_length = *config.win_length(),
        "Starting game"
    );
    if !config.is_winnable() {
        warn!("Win length exceeds board width; the game can only end in a draw");
    }

    let session = Session::new(
        Game::new(config),
        LineInput::new(io::stdin().lock()),
        io::stdout().lock(),
    )
    .with_summary(cli.summary.renderer())
    .show_history(cli.show_history);

    match session.run() {
        Ok(game) => {
            info!(status = %game.status(), turns = game.turns_played(), "Game finished");
            Ok(())
        }
        Err(SessionError::InputClosed) => {
            warn!("Input closed before the game finished");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
