//! Core domain types for N-in-a-row.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns true if nobody has marked this square.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Single-character symbol used by the renderers.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{_0} won")]
    Won(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game has reached `Won` or `Draw`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
