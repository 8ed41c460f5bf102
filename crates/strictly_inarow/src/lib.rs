//! Strictly In-a-Row - pure game logic for N-in-a-row
//!
//! Two players alternate placing X and O marks on a square board of any
//! side length. The first player to line up `k` consecutive marks along a
//! row, column or diagonal wins; a full board without such a line is a draw.
//!
//! # Architecture
//!
//! - **Board**: bounds-checked grid of squares with immutable snapshots
//! - **Rules**: windowed win detection over all four line families, draw detection
//! - **Game**: turn order and state machine (`InProgress`, `Won`, `Draw`)
//! - **History**: one snapshot per ply, replayable after the game
//! - **Invariants**: properties re-checked after every move in debug builds
//! - **Input / Render**: seams for the terminal front end
//!
//! # Example
//!
//! ```
//! use strictly_inarow::{Game, GameConfig, GameStatus, Player, Position};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(GameConfig::new(3, 3)?);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.submit_move(Position::new(row, col))?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.history().len(), 6);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod game;
mod history;
mod input;
mod invariants;
mod position;
mod render;
mod rules;
mod types;

// Crate-level exports - Domain types
pub use action::{Move, MoveError};
pub use board::{Board, Grid};
pub use position::{ParseError, Position};
pub use types::{GameStatus, Player, Square};

/// Alias for clarity when talking about what sits in a square.
pub type Mark = Player;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_WIDTH, DEFAULT_WIN_LENGTH, GameConfig, MAX_WIDTH};

// Crate-level exports - Rules
pub use rules::{LineKind, WinningLine, check_winner, has_win, is_draw, is_full, winning_line};

// Crate-level exports - Engine and history
pub use game::Game;
pub use history::{History, Replay, Snapshot};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant,
};

// Crate-level exports - Front-end seams
pub use input::{InputProvider, MoveInput, ScriptedInput};
pub use render::{JsonRenderer, Renderer, TextRenderer};
