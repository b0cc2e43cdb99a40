//! Tests for verbose output and file logging.

use logger::{enable_verbose, error, info, set_level, verbose, warn, Level};

#[cfg(feature = "verbose")]
#[test]
fn verbose_respects_runtime_flag() {
    verbose!("This should not appear");
    enable_verbose();
    assert!(logger::is_verbose_enabled());
    verbose!("This should appear: verbose test {}", 42);
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_tagged_lines() {
    use logger::{close_file_logging, init_file_logging};
    use std::fs;

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let log_path = dir.path().join("logs").join("udsgpa.log");

    set_level(Level::Info);
    assert!(init_file_logging(&log_path));

    info!("Test info message");
    warn!("Test warning message");
    error!("Test error message");

    enable_verbose();
    verbose!("This verbose message should NOT be in the file");

    close_file_logging();

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("[INFO] Test info message"));
    assert!(contents.contains("[WARN] Test warning message"));
    assert!(contents.contains("[ERROR] Test error message"));
    assert!(!contents.contains("verbose message"));
}
