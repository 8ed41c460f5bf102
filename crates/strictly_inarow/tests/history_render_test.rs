//! Tests for history replay and rendering of finished games.

use strictly_inarow::{
    Game, GameConfig, GameStatus, Grid, JsonRenderer, Player, Position, Renderer, Square,
    TextRenderer,
};

fn won_game() -> Game {
    let moves = [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)].map(|(r, c)| Position::new(r, c));
    Game::from_positions(GameConfig::default(), moves).expect("legal moves")
}

#[test]
fn test_replay_walks_every_ply() {
    let game = won_game();
    let plies: Vec<_> = game.history().replay().map(|(ply, s)| (ply, s.marks())).collect();
    assert_eq!(plies, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);

    // Each ply shows exactly the move made on it
    for (ply, mov) in game.moves().iter().enumerate() {
        let snapshot = game.history().get(ply + 1).expect("snapshot per move");
        assert_eq!(snapshot.square(mov.position), Some(Square::Occupied(mov.player)));
    }
}

#[test]
fn test_replay_restarts() {
    let game = won_game();
    let first: Vec<_> = game.history().replay().map(|(ply, _)| ply).collect();
    let second: Vec<_> = game.history().into_iter().map(|(ply, _)| ply).collect();
    assert_eq!(first, second);
}

#[test]
fn test_text_summary_for_win() {
    let game = won_game();
    let summary = TextRenderer.render_summary(game.history(), game.status());

    assert!(!summary.contains("On turn 0"));
    for ply in 1..=5 {
        assert!(summary.contains(&format!("On turn {ply} the board looked like:")));
    }
    assert!(summary.contains("0  X | X | X"));
    assert!(summary.ends_with("The game ended in 5 turns, with X being the winner.\n"));
}

#[test]
fn test_text_summary_for_draw() {
    let moves = [(0, 0), (1, 1), (0, 1), (1, 0)].map(|(r, c)| Position::new(r, c));
    let game = Game::from_positions(GameConfig::new(2, 3).expect("valid"), moves)
        .expect("legal moves");
    assert_eq!(game.status(), GameStatus::Draw);

    let summary = TextRenderer.render_summary(game.history(), game.status());
    assert!(summary.ends_with("The game ended in 4 turns, with no winners.\n"));
}

#[test]
fn test_json_summary() {
    let game = won_game();
    let summary = JsonRenderer.render_summary(game.history(), game.status());
    let value: serde_json::Value = serde_json::from_str(&summary).expect("valid json");

    assert_eq!(value["turns"], 5);
    assert_eq!(value["status"], "won");
    assert_eq!(value["winner"], "X");
    assert_eq!(value["plies"].as_array().map(Vec::len), Some(6));
    assert_eq!(value["plies"][5]["rows"][0], "XXX");
    assert_eq!(value["plies"][0]["rows"][1], "   ");
}

#[test]
fn test_snapshot_counts() {
    let game = won_game();
    let last = game.history().latest().expect("history is never empty");
    assert_eq!(last.count(Player::X), 3);
    assert_eq!(last.count(Player::O), 2);
    assert_eq!(last.squares(), game.board().squares());
}
