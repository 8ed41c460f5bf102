//! Monotonic board invariant: marks are only ever added, one per ply.

use super::super::history::Snapshot;
use super::super::{Game, Grid};
use super::Invariant;

/// Invariant: Board squares only go from empty to occupied.
///
/// Ply 0 is empty, and each snapshot keeps every mark of the one before
/// it and adds exactly one more.
pub struct MonotonicBoardInvariant;

impl MonotonicBoardInvariant {
    fn extends(before: &Snapshot, after: &Snapshot) -> bool {
        before.size() == after.size()
            && after.marks() == before.marks() + 1
            && before
                .squares()
                .iter()
                .zip(after.squares())
                .all(|(old, new)| old.is_empty() || old == new)
    }
}

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let snapshots = game.history().snapshots();
        let starts_empty = snapshots.first().is_some_and(|s| s.marks() == 0);

        starts_empty
            && snapshots
                .windows(2)
                .all(|pair| Self::extends(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Board squares are only ever filled, one per ply"
    }
}
