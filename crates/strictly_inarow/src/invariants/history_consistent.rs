//! History consistency invariant: snapshots, moves and board agree.

use super::super::{Game, Grid, Square};
use super::Invariant;

/// Invariant: There is one snapshot per move plus the starting board,
/// the latest snapshot equals the live board, and each snapshot shows
/// the mark its move placed.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let moves = game.moves();

        if history.len() != moves.len() + 1 {
            return false;
        }

        let latest_matches = history
            .latest()
            .is_some_and(|latest| latest.squares() == game.board().squares());

        latest_matches
            && moves.iter().enumerate().all(|(i, mov)| {
                let before = history.get(i).and_then(|s| s.square(mov.position));
                let after = history.get(i + 1).and_then(|s| s.square(mov.position));
                before == Some(Square::Empty) && after == Some(Square::Occupied(mov.player))
            })
    }

    fn description() -> &'static str {
        "History has one snapshot per move and ends at the current board"
    }
}
