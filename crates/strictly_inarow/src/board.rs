//! Square board of configurable side length.

use super::action::MoveError;
use super::config::{ConfigError, check_width};
use super::history::Snapshot;
use super::{Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Read access shared by the live board and its snapshots.
///
/// Rules are written against this trait so they evaluate a
/// [`Board`] and a [`Snapshot`] the same way.
pub trait Grid {
    /// Side length of the square grid.
    fn size(&self) -> usize;

    /// Squares in row-major order; always `size * size` long.
    fn squares(&self) -> &[Square];

    /// Returns the square at `pos`, or `None` off the grid.
    fn square(&self, pos: Position) -> Option<Square> {
        pos.to_index(self.size())
            .and_then(|index| self.squares().get(index).copied())
    }

    /// Number of squares marked by `player`.
    fn count(&self, player: Player) -> usize {
        self.squares()
            .iter()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }

    /// Iterates the rows top to bottom.
    fn rows(&self) -> std::slice::Chunks<'_, Square> {
        self.squares().chunks(self.size().max(1))
    }
}

/// n×n board.
///
/// Squares only ever go from `Empty` to `Occupied`; there is no way to
/// clear or overwrite a mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Side length.
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with `size` squares per side.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] unless `size` is greater than 1 and at most
    /// [`MAX_WIDTH`](crate::MAX_WIDTH).
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        check_width(size)?;
        Ok(Self::empty(size))
    }

    /// Creates an empty board for a `size` already passed through
    /// [`check_width`].
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Returns true if `pos` lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.to_index(self.size).is_some()
    }

    fn index(&self, pos: Position) -> Result<usize, MoveError> {
        pos.to_index(self.size).ok_or(MoveError::OutOfRange {
            position: pos,
            size: self.size,
        })
    }

    /// Gets the square at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `pos` is off the board.
    pub fn get(&self, pos: Position) -> Result<Square, MoveError> {
        let index = self.index(pos)?;
        Ok(self.squares[index])
    }

    /// Marks the square at `pos` for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `pos` is off the board and
    /// [`MoveError::CellOccupied`] if the square is already marked. The
    /// board is unchanged on error.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn set(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        let index = self.index(pos)?;
        if !self.squares[index].is_empty() {
            debug!(position = %pos, "Square already occupied");
            return Err(MoveError::CellOccupied(pos));
        }
        self.squares[index] = Square::Occupied(player);
        Ok(())
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Ok(Square::Empty))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| !square.is_empty())
    }

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.squares.len()).filter_map(|index| Position::from_index(index, self.size))
    }

    /// Returns the positions still open for play.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Takes an independent copy of the current squares.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.size, self.squares.clone())
    }
}

impl Grid for Board {
    fn size(&self) -> usize {
        self.size
    }

    fn squares(&self) -> &[Square] {
        &self.squares
    }
}
