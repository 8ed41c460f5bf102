//! Tests for configuration validation and TOML loading.

use std::io::Write;
use strictly_inarow::{DEFAULT_WIDTH, DEFAULT_WIN_LENGTH, GameConfig};
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_from_file() {
    let file = config_file("width_of_board = 5\nin_a_row_to_win = 4\n");
    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.width(), 5);
    assert_eq!(*config.win_length(), 4);
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = config_file("");
    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.width(), DEFAULT_WIDTH);
    assert_eq!(*config.win_length(), DEFAULT_WIN_LENGTH);
}

#[test]
fn test_string_win_length_is_rejected() {
    let file = config_file("width_of_board = 5\nin_a_row_to_win = \"test\"\n");
    let err = GameConfig::from_file(file.path()).expect_err("string value");
    assert!(err.message.contains("greater than 1"));
}

#[test]
fn test_small_and_fractional_values_are_rejected() {
    for content in [
        "width_of_board = 1",
        "width_of_board = 0",
        "in_a_row_to_win = 1",
        "in_a_row_to_win = 2.0",
        "width_of_board = true",
    ] {
        assert!(GameConfig::from_toml_str(content).is_err(), "{content}");
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).expect_err("no file");
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_raw_text_construction() {
    assert!(GameConfig::parse("5", "test").is_err());
    assert!(GameConfig::parse("0", "3").is_err());
    assert!(GameConfig::parse("3", "1").is_err());
    let config = GameConfig::parse("2", "3").expect("win length may exceed width");
    assert!(!config.is_winnable());
}
