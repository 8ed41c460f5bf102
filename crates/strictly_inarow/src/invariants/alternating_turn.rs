//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, GameStatus, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... starting with X. The current
/// player follows from the number of moves, except that a won game
/// reports the player who made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let moves = game.moves();

        if moves.first().is_some_and(|first| first.player != Player::X) {
            return false;
        }

        if moves.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        match game.status() {
            GameStatus::Won(winner) => moves.last().is_some_and(|last| last.player == winner),
            GameStatus::InProgress | GameStatus::Draw => {
                let expected_next = if moves.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                game.current_player() == expected_next
            }
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::default()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = Game::from_positions(
            GameConfig::default(),
            [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
        )
        .expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_won_game_holds() {
        let game = Game::from_positions(
            GameConfig::new(3, 2).expect("valid"),
            [Position::new(0, 0), Position::new(2, 2), Position::new(0, 1)],
        )
        .expect("legal moves");
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::from_positions(GameConfig::default(), [Position::new(0, 0)])
            .expect("legal move");
        game.moves.push(Move::new(Player::X, Position::new(1, 1)));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
