//! crates/logging/src/record.rs
//! A message assembled over several statements and logged once.

use std::fmt;

use logging_sink::Level;

use crate::logger::Logger;

/// Builder for one log line, written when the record is dropped.
///
/// Created by [`Logger::record`]. The record implements [`fmt::Write`], so a
/// message can be built up with `write!` across loops and branches and still
/// reach the sinks as a single line at the record's level. When the level
/// would not be logged the record discards its input without buffering it.
///
/// # Examples
///
/// ```
/// use std::fmt::Write as _;
/// use logging::{Level, Logger, LoggerConfig};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("peers.log");
/// let logger = Logger::new(LoggerConfig::new(Level::ERROR).with_file(&path))?;
///
/// {
///     let mut record = logger.record(Level::DEBUG);
///     write!(record, "peers:")?;
///     for peer in ["a", "b"] {
///         write!(record, " {peer}")?;
///     }
/// }
///
/// let contents = std::fs::read_to_string(&path)?;
/// assert!(contents.ends_with(": Debug: peers: a b\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use = "a record logs its text when dropped"]
pub struct LogRecord<'a> {
    logger: &'a Logger,
    level: Level,
    text: Option<String>,
}

impl<'a> LogRecord<'a> {
    pub(crate) fn new(logger: &'a Logger, level: Level) -> Self {
        let text = logger.would_log(level).then(String::new);
        Self {
            logger,
            level,
            text,
        }
    }

    /// Returns the level the line will be written at.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Reports whether the collected text will be written.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.text.is_some()
    }

    /// Returns the text collected so far, empty when disabled.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

impl fmt::Write for LogRecord<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Some(text) = self.text.as_mut() {
            text.push_str(s);
        }
        Ok(())
    }
}

impl Drop for LogRecord<'_> {
    fn drop(&mut self) {
        if let Some(text) = self.text.take() {
            self.logger.log(self.level, format_args!("{text}"));
        }
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("level", &self.level)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}
