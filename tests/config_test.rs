//! Tests for loading configuration from disk.

use noughts::AppConfig;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_load_full_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "computer_delay_ms = 250").unwrap();
    writeln!(file, "seed = 7").unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.computer_delay(), Duration::from_millis(250));
    assert_eq!(*config.seed(), Some(7));
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_partial_file_takes_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "seed = 42").unwrap();

    let config = AppConfig::load_or_default(file.path()).unwrap();
    assert_eq!(*config.computer_delay_ms(), 800);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "computer_delay_ms = \"soon\"").unwrap();

    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_overrides_apply_after_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "computer_delay_ms = 250\nseed = 7").unwrap();

    let config = AppConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(0), None);
    assert_eq!(*config.computer_delay_ms(), 0);
    assert_eq!(*config.seed(), Some(7));
}
