//! crates/logging/src/macros.rs
//! Formatting macros that skip all work when the line would be discarded.
//!
//! Each macro targets the process-wide logger by default. A leading
//! `logger: <expr>,` argument targets an explicit [`Logger`](crate::Logger)
//! instead.

/// Logs at an explicit [`Level`](crate::Level).
///
/// # Example
/// ```
/// use logging::{Level, Logger, LoggerConfig, log_at};
///
/// let logger = Logger::new(LoggerConfig::new(Level::WARNING))?;
/// log_at!(logger: &logger, Level::ERROR, "boom {}", 7);
/// log_at!(Level::DEBUG, "ignored until logging::init runs");
/// # Ok::<(), logging::InitError>(())
/// ```
#[macro_export]
macro_rules! log_at {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        let level: $crate::Level = $level;
        if logger.would_log(level) {
            logger.log(level, ::std::format_args!($($arg)+));
        }
    }};
    ($level:expr, $($arg:tt)+) => {{
        if let ::std::option::Option::Some(logger) = $crate::global() {
            $crate::log_at!(logger: logger, $level, $($arg)+);
        }
    }};
}

/// Logs at [`Level::ERROR`](crate::Level::ERROR).
///
/// # Example
/// ```ignore
/// error_log!("cannot open {}: {}", path.display(), err);
/// ```
#[macro_export]
macro_rules! error_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $logger, $crate::Level::ERROR, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Level::ERROR, $($arg)+)
    };
}

/// Logs at [`Level::WARNING`](crate::Level::WARNING).
///
/// # Example
/// ```ignore
/// warning_log!("retrying in {}s", delay);
/// ```
#[macro_export]
macro_rules! warning_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $logger, $crate::Level::WARNING, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Level::WARNING, $($arg)+)
    };
}

/// Logs at [`Level::DEBUG`](crate::Level::DEBUG).
///
/// # Example
/// ```ignore
/// debug_log!("indexed {count} files");
/// ```
#[macro_export]
macro_rules! debug_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $logger, $crate::Level::DEBUG, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Level::DEBUG, $($arg)+)
    };
}

/// Logs at [`Level::VERBOSE`](crate::Level::VERBOSE).
///
/// # Example
/// ```ignore
/// verbose_log!("read {} bytes from {}", n, peer);
/// ```
#[macro_export]
macro_rules! verbose_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $logger, $crate::Level::VERBOSE, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Level::VERBOSE, $($arg)+)
    };
}
