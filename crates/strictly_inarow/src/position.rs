//! Board coordinates and the strict text form players type them in.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A `(row, col)` coordinate on the board, both counted from zero.
///
/// Positions are not tied to a board size; range checks happen when a
/// position is applied to a [`Board`](crate::Board).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Position {
    /// Row index, top row is 0.
    pub row: usize,
    /// Column index, left column is 0.
    pub col: usize,
}

impl Position {
    /// Converts the position to a row-major index on a board of `size`.
    ///
    /// Returns `None` when the position falls outside the board.
    pub fn to_index(self, size: usize) -> Option<usize> {
        (self.row < size && self.col < size).then(|| self.row * size + self.col)
    }

    /// Creates a position from a row-major index on a board of `size`.
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        (size > 0 && index < size * size).then(|| Self::new(index / size, index % size))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Why a line of player input is not a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// Input did not contain exactly two values.
    #[display("Expected a row and a column, got {_0} value(s)")]
    WrongArity(#[error(not(source))] usize),

    /// A value was not a non-negative integer.
    #[display("'{_0}' is not a non-negative integer")]
    InvalidCoordinate(#[error(not(source))] String),
}

impl FromStr for Position {
    type Err = ParseError;

    /// Parses `"row col"`: exactly two whitespace-separated non-negative integers.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [row, col] = parts.as_slice() else {
            return Err(ParseError::WrongArity(parts.len()));
        };

        let parse = |value: &str| {
            value
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidCoordinate(value.to_string()))
        };

        Ok(Self::new(parse(row)?, parse(col)?))
    }
}
