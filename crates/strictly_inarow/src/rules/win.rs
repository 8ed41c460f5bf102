//! Win detection over rows, columns and every diagonal.
//!
//! A line is a maximal straight run of squares across the board. An n×n
//! board has `n` rows, `n` columns and `2n - 1` diagonals in each
//! direction, the shortest of which is a single corner square. A player
//! wins when some window of `k` consecutive squares on some line holds
//! only their mark.

use super::super::board::Grid;
use super::super::{Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Family of parallel lines on the board.
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
pub enum LineKind {
    /// Left to right, constant row.
    Row,
    /// Top to bottom, constant column.
    Column,
    /// Top-left to bottom-right, constant `row - col`.
    Diagonal,
    /// Top-right to bottom-left, constant `row + col`.
    AntiDiagonal,
}

impl LineKind {
    /// Every line of this family on a board of side `size`.
    ///
    /// Rows and columns are each `size` long. The two diagonal families
    /// hold `2 * size - 1` lines of length 1 through `size`. Positions
    /// within a line are ordered by increasing row, then column.
    pub fn lines(self, size: usize) -> Vec<Vec<Position>> {
        match self {
            LineKind::Row => (0..size)
                .map(|row| (0..size).map(|col| Position::new(row, col)).collect())
                .collect(),
            LineKind::Column => (0..size)
                .map(|col| (0..size).map(|row| Position::new(row, col)).collect())
                .collect(),
            LineKind::Diagonal => (0..size)
                .rev()
                .map(|row| (row, 0))
                .chain((1..size).map(|col| (0, col)))
                .map(|(row, col)| {
                    (0..size - row.max(col))
                        .map(|step| Position::new(row + step, col + step))
                        .collect()
                })
                .collect(),
            LineKind::AntiDiagonal => (0..(2 * size).saturating_sub(1))
                .map(|sum| {
                    let first_row = sum.saturating_sub(size - 1);
                    let last_row = sum.min(size - 1);
                    (first_row..=last_row)
                        .map(|row| Position::new(row, sum - row))
                        .collect()
                })
                .collect(),
        }
    }
}

/// A window of consecutive squares all held by one player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WinningLine {
    /// Family the window lies on.
    kind: LineKind,
    /// Player holding every square of the window.
    player: Player,
    /// Window squares in line order.
    positions: Vec<Position>,
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<String> = self.positions.iter().map(ToString::to_string).collect();
        write!(f, "{} {}: {}", self.player, self.kind, cells.join(" "))
    }
}

/// Finds a window of `win_length` consecutive `player` marks.
///
/// Families are scanned in the order rows, columns, diagonals,
/// anti-diagonals and the first match is returned. Lines shorter than
/// `win_length` are skipped, so a `win_length` larger than the board never
/// matches. A `win_length` of zero never matches either.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn winning_line<G: Grid + ?Sized>(
    grid: &G,
    player: Player,
    win_length: usize,
) -> Option<WinningLine> {
    if win_length == 0 || win_length > grid.size() {
        return None;
    }

    let mark = Square::Occupied(player);
    for kind in LineKind::iter() {
        for line in kind.lines(grid.size()) {
            if line.len() < win_length {
                continue;
            }
            let found = line
                .windows(win_length)
                .find(|window| window.iter().all(|pos| grid.square(*pos) == Some(mark)));
            if let Some(window) = found {
                debug!(%kind, start = %window[0], "Winning window found");
                return Some(WinningLine {
                    kind,
                    player,
                    positions: window.to_vec(),
                });
            }
        }
    }

    None
}

/// Returns true if `player` holds `win_length` consecutive squares on
/// some row, column or diagonal.
#[instrument(skip(grid))]
pub fn has_win<G: Grid + ?Sized>(grid: &G, player: Player, win_length: usize) -> bool {
    winning_line(grid, player, win_length).is_some()
}

/// Returns the first player, X before O, with a winning window.
///
/// A legal game never has both; this only matters for hand-built boards.
#[instrument(skip(grid))]
pub fn check_winner<G: Grid + ?Sized>(grid: &G, win_length: usize) -> Option<Player> {
    Player::iter().find(|player| has_win(grid, *player, win_length))
}
