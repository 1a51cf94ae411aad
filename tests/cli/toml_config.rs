//! CLI TOML configuration tests

use crate::common::{run_uniqueq, stdout_lines, write_input};
use clap::Parser;
use uniqueq::app::cli::args::Args;
use uniqueq::app::cli::config::{ConfigError, Settings};

#[test]
fn test_config_file_enables_filters() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_input(
        dir.path(),
        "uniqueq.toml",
        "trim = true\nignore-blank = true\n",
    );

    let output = run_uniqueq(&["--config-file", &config], " a\n\na\n");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["a"]);
}

#[test]
fn test_missing_config_file_fails() {
    let output = run_uniqueq(&["--config-file", "/definitely/not/here.toml"], "a\n");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "got: {}", stderr);
}

#[test]
fn test_invalid_config_value_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_input(dir.path(), "uniqueq.toml", "workers = 0\n");

    let output = run_uniqueq(&["--config-file", &config], "a\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("workers"));
}

#[test]
fn test_cli_flags_override_config_table() {
    let mut config = toml::Table::new();
    config.insert("workers".to_string(), toml::Value::Integer(8));
    config.insert("stats".to_string(), toml::Value::Boolean(false));

    let args = Args::try_parse_from(["uniqueq", "--workers", "2", "--stats"]).unwrap();
    let settings = Settings::resolve(&args, Some(&config)).unwrap();

    assert_eq!(settings.workers, 2);
    assert!(settings.stats);
}

#[test]
fn test_wrong_type_in_config_table() {
    let mut config = toml::Table::new();
    config.insert(
        "trim".to_string(),
        toml::Value::String("sometimes".to_string()),
    );

    let args = Args::default();
    match Settings::resolve(&args, Some(&config)) {
        Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "trim"),
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}
