//! crates/logging/src/error.rs
//! Errors reported while setting a logger up.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to initialize a [`Logger`](crate::Logger).
///
/// Logging calls themselves never fail; only construction and installation
/// report errors.
#[derive(Debug, Error)]
pub enum InitError {
    /// The configured log file could not be opened for writing.
    #[error("failed to open log file {}: {source}", .path.display())]
    OpenLogFile {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A process-wide logger is already installed.
    #[error("a process-wide logger is already installed")]
    AlreadyInitialized,
    /// Another global `tracing` subscriber is already installed.
    #[cfg(feature = "tracing")]
    #[error("a global tracing subscriber is already installed")]
    SubscriberAlreadySet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn open_log_file_names_path_and_cause() {
        let error = InitError::OpenLogFile {
            path: PathBuf::from("/nonexistent/app.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        let text = error.to_string();
        assert!(text.contains("/nonexistent/app.log"));
        assert!(text.contains("no such directory"));
        assert!(error.source().is_some());
    }

    #[test]
    fn already_initialized_has_no_source() {
        let error = InitError::AlreadyInitialized;
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "a process-wide logger is already installed");
    }
}
