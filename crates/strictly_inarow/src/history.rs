//! Per-ply board snapshots and replay.

use super::board::{Board, Grid};
use super::Square;
use serde::Serialize;
use tracing::{instrument, trace};

/// Immutable copy of the board at one point in time.
///
/// Snapshots share nothing with the board they were taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Snapshot {
    size: usize,
    squares: Box<[Square]>,
}

impl Snapshot {
    pub(crate) fn new(size: usize, squares: Vec<Square>) -> Self {
        Self {
            size,
            squares: squares.into_boxed_slice(),
        }
    }

    /// Number of marked squares.
    pub fn marks(&self) -> usize {
        self.squares.iter().filter(|square| !square.is_empty()).count()
    }
}

impl Grid for Snapshot {
    fn size(&self) -> usize {
        self.size
    }

    fn squares(&self) -> &[Square] {
        &self.squares
    }
}

/// Ordered board snapshots for one game.
///
/// Index 0 is the empty starting board and index `i` is the board after
/// ply `i`. Entries are never modified once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Starts a history with `initial` as ply 0.
    pub fn new(initial: &Board) -> Self {
        Self {
            snapshots: vec![initial.snapshot()],
        }
    }

    /// Appends an independent copy of `board`.
    #[instrument(skip_all, fields(ply = self.snapshots.len()))]
    pub fn record(&mut self, board: &Board) {
        trace!("Recording snapshot");
        self.snapshots.push(board.snapshot());
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false for a history created with [`History::new`].
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of plies recorded after the starting board.
    pub fn plies(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    /// Snapshot after `ply`, where ply 0 is the starting board.
    pub fn get(&self, ply: usize) -> Option<&Snapshot> {
        self.snapshots.get(ply)
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// All snapshots in ply order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Walks `(ply, snapshot)` pairs from the starting board.
    ///
    /// The iterator is lazy and `Clone`; calling `replay` again starts over.
    pub fn replay(&self) -> Replay<'_> {
        Replay {
            inner: self.snapshots.iter().enumerate(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = (usize, &'a Snapshot);
    type IntoIter = Replay<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.replay()
    }
}

/// Iterator returned by [`History::replay`].
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Snapshot>>,
}

impl<'a> Iterator for Replay<'a> {
    type Item = (usize, &'a Snapshot);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Replay<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn board_with(moves: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(3).expect("valid size");
        for &(row, col, player) in moves {
            board.set(Position::new(row, col), player).expect("empty square");
        }
        board
    }

    #[test]
    fn test_new_history_holds_initial_board() {
        let history = History::new(&Board::new(3).expect("valid size"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.plies(), 0);
        assert!(!history.is_empty());
        assert_eq!(history.latest().map(Snapshot::marks), Some(0));
    }

    #[test]
    fn test_recorded_snapshots_are_copies() {
        let mut board = Board::new(3).expect("valid size");
        let mut history = History::new(&board);
        board.set(Position::new(0, 0), Player::X).expect("empty square");
        history.record(&board);
        board.set(Position::new(1, 1), Player::O).expect("empty square");

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1).map(Snapshot::marks), Some(1));
        assert_eq!(
            history.get(1).and_then(|s| s.square(Position::new(1, 1))),
            Some(Square::Empty)
        );
    }

    #[test]
    fn test_replay_is_restartable() {
        let mut history = History::new(&Board::new(3).expect("valid size"));
        history.record(&board_with(&[(0, 0, Player::X)]));
        history.record(&board_with(&[(0, 0, Player::X), (2, 2, Player::O)]));

        let replay = history.replay();
        assert_eq!(replay.len(), 3);

        let first: Vec<_> = replay.clone().map(|(ply, s)| (ply, s.marks())).collect();
        let second: Vec<_> = history.replay().map(|(ply, s)| (ply, s.marks())).collect();
        assert_eq!(first, vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(first, second);
    }
}
