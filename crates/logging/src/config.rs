//! crates/logging/src/config.rs
//! Logger configuration supplied by the embedding application.

use std::path::{Path, PathBuf};

use logging_sink::{Level, OpenMode};

/// Settings used to build a [`Logger`](crate::Logger).
///
/// The threshold decides what reaches standard error; the optional file
/// receives every line regardless of level.
///
/// # Examples
///
/// ```
/// use logging::{Level, LoggerConfig, OpenMode};
///
/// let config = LoggerConfig::new(Level::WARNING)
///     .with_file("/var/log/app.log")
///     .append(true);
///
/// assert_eq!(config.level, Level::WARNING);
/// assert_eq!(config.open_mode, OpenMode::Append);
/// assert!(config.file_path().is_some());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Console threshold.
    pub level: Level,
    /// Optional log file; an empty path means no file.
    pub file: Option<PathBuf>,
    /// Whether an existing log file is kept or truncated.
    pub open_mode: OpenMode,
}

impl LoggerConfig {
    /// Creates a console-only configuration with the given threshold.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Creates a console-only configuration from a count of `-v` flags.
    #[must_use]
    pub fn from_verbose_level(count: u8) -> Self {
        Self::new(Level::from_verbosity(count))
    }

    /// Replaces the console threshold.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Routes every line to `path` as well.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Replaces the open policy for the log file.
    #[must_use]
    pub fn with_open_mode(mut self, open_mode: OpenMode) -> Self {
        self.open_mode = open_mode;
        self
    }

    /// Selects [`OpenMode::Append`] when `append` is true, else truncation.
    #[must_use]
    pub fn append(self, append: bool) -> Self {
        self.with_open_mode(OpenMode::from(append))
    }

    /// Returns the configured file, ignoring an empty path.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_console_only_errors() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, Level::ERROR);
        assert!(config.file_path().is_none());
        assert_eq!(config.open_mode, OpenMode::Truncate);
    }

    #[test]
    fn empty_path_means_no_file() {
        let config = LoggerConfig::new(Level::DEBUG).with_file("");
        assert!(config.file.is_some());
        assert!(config.file_path().is_none());
    }

    #[test]
    fn builder_sets_every_field() {
        let config = LoggerConfig::default()
            .with_level(Level::VERBOSE)
            .with_file("app.log")
            .with_open_mode(OpenMode::Append);
        assert_eq!(config.level, Level::VERBOSE);
        assert_eq!(config.file_path(), Some(Path::new("app.log")));
        assert!(config.open_mode.is_append());
    }

    #[test]
    fn append_flag_maps_to_open_mode() {
        assert_eq!(LoggerConfig::default().append(true).open_mode, OpenMode::Append);
        assert_eq!(
            LoggerConfig::default().append(false).open_mode,
            OpenMode::Truncate
        );
    }

    #[test]
    fn verbose_level_maps_to_threshold() {
        assert_eq!(LoggerConfig::from_verbose_level(0).level, Level::ERROR);
        assert_eq!(LoggerConfig::from_verbose_level(1).level, Level::WARNING);
        assert_eq!(LoggerConfig::from_verbose_level(3).level, Level::VERBOSE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_config() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"level": 2, "file": "/tmp/app.log", "open_mode": "append"}"#)
                .unwrap();
        assert_eq!(config.level, Level::DEBUG);
        assert_eq!(config.open_mode, OpenMode::Append);

        let config: LoggerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }
}
