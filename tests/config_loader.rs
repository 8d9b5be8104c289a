//! Config loading, defaults, and validation.

use std::fs;
use std::path::PathBuf;

use corsair::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("does-not-exist.toml");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.filter.banned_words, vec!["trump".to_string()]);
}

#[test]
fn valid_file_parses() {
    let (_dir, path) = write_config(
        r#"
[ui]
tick_rate_ms = 100

[filter]
banned_words = ["kraken", "scurvy"]
"#,
    );

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(
        config.filter.banned_words,
        vec!["kraken".to_string(), "scurvy".to_string()]
    );
}

#[test]
fn partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[filter]
banned_words = ["kraken"]
"#,
    );

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.filter.banned_words, vec!["kraken".to_string()]);
}

#[test]
fn empty_banned_list_is_allowed() {
    let (_dir, path) = write_config(
        r#"
[filter]
banned_words = []
"#,
    );

    let config = Config::load_from(&path).expect("load");
    assert!(config.filter.banned_words.is_empty());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[ui\ntick_rate_ms = ");

    let err = Config::load_from(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[ui]
tick_rate_ms = 0
"#,
    );

    let err = Config::load_from(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn blank_banned_word_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[filter]
banned_words = ["kraken", "  "]
"#,
    );

    let err = Config::load_from(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
