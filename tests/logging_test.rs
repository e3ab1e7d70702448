//! Tests for tracing setup. Kept in its own binary since the subscriber is global.

use noughts::logging;

#[test]
fn test_second_install_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noughts.log");

    logging::init_file(&path).unwrap();
    assert!(path.exists());
    tracing::info!("written to the log file");

    let err = logging::init_stderr().unwrap_err();
    assert!(err.to_string().contains("Failed to install tracing subscriber"));
}

#[test]
fn test_unwritable_log_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("noughts.log");

    let err = logging::init_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to create log file"));
}
