//! Integration tests for the log file sink.
//!
//! These tests cover the line format written to disk, arrival order from a
//! single thread, and the append versus truncate open policies.

use logging::{Level, Logger, LoggerConfig, OpenMode};
use test_support::{SharedBuffer, is_timestamp, log_path, read_lines, scratch_dir, split_line};

fn file_logger(config: LoggerConfig) -> Logger {
    Logger::with_console(config, SharedBuffer::new()).expect("file logger")
}

// ============================================================================
// Round Trip Tests
// ============================================================================

/// Verifies N messages come back as N well-formed lines in call order.
#[test]
fn single_thread_round_trip_preserves_order() {
    let dir = scratch_dir();
    let path = log_path(&dir, "round_trip.log");
    let logger = file_logger(LoggerConfig::new(Level::ERROR).with_file(&path));

    for index in 0..100 {
        logger.debug(format_args!("message {index}"));
    }
    logger.shutdown();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 100);
    for (index, line) in lines.iter().enumerate() {
        let (stamp, rest) = split_line(line).expect("well-formed line");
        assert!(is_timestamp(stamp));
        assert_eq!(rest, format!("Debug: message {index}"));
    }
}

/// Verifies each line is flushed before the call returns.
#[test]
fn lines_are_visible_without_shutdown() {
    let dir = scratch_dir();
    let path = log_path(&dir, "flushed.log");
    let logger = file_logger(LoggerConfig::new(Level::ERROR).with_file(&path));

    logger.warning(format_args!("first"));
    assert_eq!(read_lines(&path).len(), 1);
    logger.warning(format_args!("second"));
    assert_eq!(read_lines(&path).len(), 2);
}

/// Verifies embedded newlines are written verbatim.
#[test]
fn embedded_newline_is_not_escaped() {
    let dir = scratch_dir();
    let path = log_path(&dir, "multiline.log");
    let logger = file_logger(LoggerConfig::new(Level::ERROR).with_file(&path));

    logger.error(format_args!("line one\nline two"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.ends_with(": Error: line one\nline two\n"));
}

/// Verifies empty messages still produce a stamped line.
#[test]
fn empty_message_writes_prefix_only() {
    let dir = scratch_dir();
    let path = log_path(&dir, "empty.log");
    let logger = file_logger(LoggerConfig::new(Level::ERROR).with_file(&path));

    logger.error(format_args!(""));

    let lines = read_lines(&path);
    assert_eq!(split_line(&lines[0]).map(|(_, rest)| rest), Some("Error: "));
}

// ============================================================================
// Open Mode Tests
// ============================================================================

/// Verifies append mode keeps lines from a previous run.
#[test]
fn append_preserves_previous_run() {
    let dir = scratch_dir();
    let path = log_path(&dir, "append.log");

    {
        let logger = file_logger(LoggerConfig::new(Level::ERROR).with_file(&path).append(true));
        logger.error(format_args!("first run"));
    }
    {
        let logger = file_logger(LoggerConfig::new(Level::ERROR).with_file(&path).append(true));
        logger.error(format_args!("second run"));
    }

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("Error: first run"));
    assert!(lines[1].ends_with("Error: second run"));
}

/// Verifies truncate mode discards lines from a previous run.
#[test]
fn truncate_discards_previous_run() {
    let dir = scratch_dir();
    let path = log_path(&dir, "truncate.log");

    {
        let logger = file_logger(
            LoggerConfig::new(Level::ERROR)
                .with_file(&path)
                .with_open_mode(OpenMode::Truncate),
        );
        logger.error(format_args!("first run"));
    }
    {
        let logger = file_logger(LoggerConfig::new(Level::ERROR).with_file(&path).append(false));
        logger.error(format_args!("second run"));
    }

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("Error: second run"));
}

/// Verifies a directory path cannot be used as the log file.
#[test]
fn directory_path_fails_to_open() {
    let dir = scratch_dir();
    let result = Logger::new(LoggerConfig::new(Level::ERROR).with_file(dir.path()));
    assert!(matches!(result, Err(logging::InitError::OpenLogFile { .. })));
}
