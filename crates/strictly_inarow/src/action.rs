//! First-class action types for N-in-a-row.
//!
//! Moves are domain events, not side effects. Every accepted ply is kept
//! as a [`Move`] so the engine can reason about who played where.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// None of these leave the board, turn or history changed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position lies outside the board.
    #[display("Position {position} is off the {size}x{size} board")]
    OutOfRange {
        /// Rejected position.
        position: Position,
        /// Side length of the board.
        size: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl MoveError {
    /// True for errors a player fixes by choosing another square.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MoveError::OutOfRange { .. } | MoveError::CellOccupied(_))
    }
}

impl std::error::Error for MoveError {}
