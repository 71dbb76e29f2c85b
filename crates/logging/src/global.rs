//! crates/logging/src/global.rs
//! Process-wide logger for call sites that cannot receive one explicitly.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use logging_sink::Level;

use crate::config::LoggerConfig;
use crate::error::InitError;
use crate::guard::LoggerGuard;
use crate::logger::Logger;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Installs the process-wide logger.
///
/// Call once, early in `main`, and keep the returned guard alive for the rest
/// of the program; dropping it flushes and closes the log file.
///
/// When the log file cannot be opened, a console-only logger with the
/// requested threshold is still installed and the open error is returned, so
/// console filtering behaves as configured either way.
///
/// # Errors
///
/// - [`InitError::AlreadyInitialized`] if a logger is already installed.
/// - [`InitError::OpenLogFile`] if the configured file cannot be opened.
pub fn init(config: LoggerConfig) -> Result<LoggerGuard<'static>, InitError> {
    if GLOBAL.get().is_some() {
        return Err(InitError::AlreadyInitialized);
    }

    let level = config.level;
    let (logger, outcome) = match Logger::new(config) {
        Ok(logger) => (logger, Ok(())),
        Err(error) => (Logger::console_only(level), Err(error)),
    };

    let mut installed = false;
    let global = GLOBAL.get_or_init(|| {
        installed = true;
        logger
    });
    if !installed {
        return Err(InitError::AlreadyInitialized);
    }
    outcome.map(|()| LoggerGuard::new(global))
}

/// Returns the process-wide logger, if one is installed.
#[must_use]
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Returns the installed console threshold, or [`Level::ERROR`] before
/// [`init`].
#[must_use]
pub fn log_level() -> Level {
    global().map_or(Level::ERROR, Logger::level)
}

/// Returns the installed log file path, if any.
#[must_use]
pub fn log_file() -> Option<&'static Path> {
    global().and_then(Logger::log_file)
}

/// Reports whether a line at `level` would be written by the process-wide
/// logger. Always `false` before [`init`].
#[must_use]
pub fn test_log(level: Level) -> bool {
    global().is_some_and(|logger| logger.would_log(level))
}

/// Logs through the process-wide logger; a no-op before [`init`].
pub fn log(level: Level, args: fmt::Arguments<'_>) {
    if let Some(logger) = global() {
        logger.log(level, args);
    }
}
