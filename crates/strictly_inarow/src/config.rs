//! Game configuration: board width and marks in a row needed to win.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board width used when none is configured.
pub const DEFAULT_WIDTH: usize = 3;

/// Marks in a row needed to win when none is configured.
pub const DEFAULT_WIN_LENGTH: usize = 3;

/// Largest board width accepted.
pub const MAX_WIDTH: usize = 1024;

const WIDTH_MESSAGE: &str = "The width of board must be an integer greater than 1";
const WIN_LENGTH_MESSAGE: &str =
    "The amount of marks needed to win (in succession) must be an integer greater than 1";

/// Validated construction parameters for a game.
///
/// A win length larger than the width is allowed; such a game can only
/// end in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize)]
pub struct GameConfig {
    /// Side length of the square board.
    width: usize,
    /// Consecutive marks needed to win.
    win_length: usize,
}

/// On-disk form of [`GameConfig`], validated before use.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    width_of_board: Option<toml::Value>,
    in_a_row_to_win: Option<toml::Value>,
}

impl GameConfig {
    /// Creates a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either value is not greater than 1, or if
    /// `width` exceeds [`MAX_WIDTH`].
    #[instrument]
    pub fn new(width: usize, win_length: usize) -> Result<Self, ConfigError> {
        check_width(width)?;
        if win_length <= 1 {
            return Err(ConfigError::new(format!(
                "{WIN_LENGTH_MESSAGE}, got {win_length}"
            )));
        }
        Ok(Self { width, win_length })
    }

    /// Creates a configuration from raw text, as typed on a command line.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either value is not an integer greater than 1.
    #[instrument]
    pub fn parse(width: &str, win_length: &str) -> Result<Self, ConfigError> {
        let width = parse_setting(width, WIDTH_MESSAGE)?;
        let win_length = parse_setting(win_length, WIN_LENGTH_MESSAGE)?;
        Self::new(width, win_length)
    }

    /// Parses TOML with optional `width_of_board` and `in_a_row_to_win` keys.
    ///
    /// Missing keys fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed TOML, unknown keys, or values
    /// that are not integers greater than 1.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?file, "Parsed config file");

        let width = toml_setting(file.width_of_board, DEFAULT_WIDTH, WIDTH_MESSAGE)?;
        let win_length =
            toml_setting(file.in_a_row_to_win, DEFAULT_WIN_LENGTH, WIN_LENGTH_MESSAGE)?;
        Self::new(width, win_length)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(width = config.width, win_length = config.win_length, "Config loaded successfully");
        Ok(config)
    }

    /// Returns false when no line on the board is long enough to win.
    pub fn is_winnable(&self) -> bool {
        self.win_length <= self.width
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

/// Rejects widths outside `2..=MAX_WIDTH`, including any whose square
/// count overflows.
#[track_caller]
pub(crate) fn check_width(width: usize) -> Result<usize, ConfigError> {
    if width <= 1 {
        return Err(ConfigError::new(format!("{WIDTH_MESSAGE}, got {width}")));
    }
    match width.checked_mul(width) {
        Some(squares) if width <= MAX_WIDTH => Ok(squares),
        _ => Err(ConfigError::new(format!(
            "The width of board must be at most {MAX_WIDTH}, got {width}"
        ))),
    }
}

#[instrument]
fn parse_setting(raw: &str, message: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::new(format!("{message}, got '{raw}'")))
}

#[instrument]
fn toml_setting(
    value: Option<toml::Value>,
    default: usize,
    message: &str,
) -> Result<usize, ConfigError> {
    match value {
        None => Ok(default),
        Some(toml::Value::Integer(n)) => {
            usize::try_from(n).map_err(|_| ConfigError::new(format!("{message}, got {n}")))
        }
        Some(other) => Err(ConfigError::new(format!("{message}, got {other}"))),
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
