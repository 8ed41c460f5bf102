//! Draw detection logic.

use super::super::board::Grid;
use super::win::check_winner;
use tracing::instrument;

/// Checks if every square is occupied.
#[instrument(skip(grid))]
pub fn is_full<G: Grid + ?Sized>(grid: &G) -> bool {
    grid.squares().iter().all(|square| !square.is_empty())
}

/// A full board on which nobody has `win_length` in a row.
#[instrument(skip(grid))]
pub fn is_draw<G: Grid + ?Sized>(grid: &G, win_length: usize) -> bool {
    is_full(grid) && check_winner(grid, win_length).is_none()
}
