//! End-to-end tests for scripted terminal sessions.

use std::io::Cursor;
use strictly_inarow::{Game, GameConfig, GameStatus, Player};
use strictly_inarow_cli::{Cli, LineInput, Session, SessionError, SummaryFormat};

fn run(config: GameConfig, script: &str, format: SummaryFormat) -> (Result<Game, SessionError>, String) {
    let mut output = Vec::new();
    let result = Session::new(Game::new(config), LineInput::new(Cursor::new(script.to_string())), &mut output)
        .with_summary(format.renderer())
        .run();
    (result, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_top_row_win_with_history() {
    let script = "0 0\n1 1\n0 1\n2 2\n0 2\nyes\n";
    let (result, output) = run(GameConfig::default(), script, SummaryFormat::Text);
    let game = result.expect("game finishes");

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.history().len(), 6);
    assert!(output.contains("Where should X go: "));
    assert!(output.contains("Where should O go: "));
    assert!(output.contains("X won!"));
    assert!(output.contains("Enter 'yes'"));
    assert!(output.contains("On turn 5 the board looked like:"));
    assert!(output.contains("The game ended in 5 turns, with X being the winner."));
}

#[test]
fn test_draw_declines_history() {
    let script = "0 0\n1 1\n0 2\n0 1\n2 1\n1 2\n1 0\n2 0\n2 2\nno thanks\n";
    let (result, output) = run(GameConfig::default(), script, SummaryFormat::Text);
    let game = result.expect("game finishes");

    assert_eq!(game.status(), GameStatus::Draw);
    assert!(output.contains("It's a draw."));
    assert!(!output.contains("On turn"));
}

#[test]
fn test_bad_lines_are_reprompted() {
    let script = "hello\n5 5\n1\n0 0\n0 0\n1 0\n0 1\n1 1\n";
    let config = GameConfig::new(4, 2).expect("valid");
    let (result, output) = run(config, script, SummaryFormat::Text);
    let game = result.expect("game finishes");

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.turns_played(), 3);
    assert_eq!(output.matches("Please enter a valid input: ").count(), 4);
}

#[test]
fn test_eof_mid_game() {
    let (result, _) = run(GameConfig::default(), "1 1\n", SummaryFormat::Text);
    assert!(matches!(result, Err(SessionError::InputClosed)));
}

#[test]
fn test_eof_at_history_question_still_finishes() {
    let (result, output) = run(GameConfig::new(2, 2).expect("valid"), "0 0\n1 1\n1 0\n", SummaryFormat::Text);
    assert_eq!(result.expect("game finishes").status(), GameStatus::Won(Player::X));
    assert!(!output.contains("On turn"));
}

#[test]
fn test_json_summary_output() {
    let (result, output) = run(GameConfig::new(2, 2).expect("valid"), "0 0\n1 1\n0 1\nyes\n", SummaryFormat::Json);
    assert!(result.is_ok());
    assert!(output.contains("\"status\": \"won\""));
    assert!(output.contains("\"winner\": \"X\""));
}

#[test]
fn test_cli_resolves_config_file_and_overrides() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("game.toml");
    std::fs::write(&path, "width_of_board = 6\nin_a_row_to_win = 5\n").expect("write config");
    let path = path.to_string_lossy().to_string();

    let cli = <Cli as clap::Parser>::try_parse_from(["inarow", "--config", &path]).expect("valid args");
    assert_eq!(cli.game_config().expect("valid"), GameConfig::new(6, 5).expect("valid"));

    let cli = <Cli as clap::Parser>::try_parse_from(["inarow", "--config", &path, "-k", "4"]).expect("valid args");
    assert_eq!(cli.game_config().expect("valid"), GameConfig::new(6, 4).expect("valid"));

    let cli = <Cli as clap::Parser>::try_parse_from(["inarow", "--config", &path, "-w", "1"]).expect("valid args");
    assert!(cli.game_config().is_err());
}
