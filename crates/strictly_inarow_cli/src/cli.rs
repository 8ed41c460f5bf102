//! Command-line interface for strictly_inarow.

use clap::{Parser, ValueEnum};
use strictly_inarow::{ConfigError, GameConfig, JsonRenderer, Renderer, TextRenderer};
use tracing::{debug, instrument};

/// Strictly In-a-Row - N-in-a-row for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "inarow")]
#[command(about = "Tic-tac-toe on any board size with any win length", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Squares along each side of the board (integer greater than 1)
    #[arg(short, long = "width", visible_alias = "width-of-board")]
    pub width: Option<String>,

    /// Marks in a row needed to win (integer greater than 1)
    #[arg(short = 'k', long = "win-length", visible_alias = "in-a-row-to-win")]
    pub win_length: Option<String>,

    /// TOML file with `width_of_board` and `in_a_row_to_win`
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Format of the post-game history
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub summary: SummaryFormat,

    /// Print the history when the game ends without asking
    #[arg(long)]
    pub show_history: bool,
}

/// How the post-game history is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SummaryFormat {
    /// Boards drawn as text grids
    #[default]
    Text,
    /// One JSON document
    Json,
}

impl SummaryFormat {
    /// Renderer for this format.
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            SummaryFormat::Text => Box::new(TextRenderer),
            SummaryFormat::Json => Box::new(JsonRenderer),
        }
    }
}

impl Cli {
    /// Resolves the game configuration.
    ///
    /// Flags override the config file, which overrides the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be loaded or a value is
    /// not an integer greater than 1.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        debug!(?base, "Base configuration");

        if self.width.is_none() && self.win_length.is_none() {
            return Ok(base);
        }

        let width = self
            .width
            .clone()
            .unwrap_or_else(|| base.width().to_string());
        let win_length = self
            .win_length
            .clone()
            .unwrap_or_else(|| base.win_length().to_string());
        GameConfig::parse(&width, &win_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["inarow"]).expect("valid args");
        assert_eq!(cli.summary, SummaryFormat::Text);
        assert!(!cli.show_history);
        assert_eq!(cli.game_config().expect("valid"), GameConfig::default());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["inarow", "-w", "5", "--win-length", "4", "--summary", "json"])
            .expect("valid args");
        assert_eq!(cli.summary, SummaryFormat::Json);
        assert_eq!(cli.game_config().expect("valid"), GameConfig::new(5, 4).expect("valid"));
    }

    #[test]
    fn test_non_integer_is_config_error() {
        let cli = Cli::try_parse_from(["inarow", "--width", "5", "--in-a-row-to-win", "test"])
            .expect("clap accepts any text");
        assert!(cli.game_config().is_err());
    }
}
