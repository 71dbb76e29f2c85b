//! crates/logging-sink/src/level.rs
//! Severity ordinals and the prefixes rendered in front of each line.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log line.
///
/// Levels are small ordinals where a lower value means a more severe message:
/// [`Level::ERROR`] is `0` and [`Level::VERBOSE`] is `3`. Ordinals above the
/// named table are accepted and render without a prefix, which lets callers
/// keep extra verbosity tiers that only reach the log file.
///
/// A line at level `L` is shown on the console iff `L <= threshold`, so the
/// derived [`Ord`] doubles as the filtering rule.
///
/// # Examples
///
/// ```
/// use logging_sink::Level;
///
/// assert!(Level::ERROR < Level::WARNING);
/// assert_eq!(Level::DEBUG.prefix(), "Debug: ");
/// assert_eq!(Level::new(7).prefix(), "");
/// assert_eq!("warning".parse::<Level>(), Ok(Level::WARNING));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Level(u8);

const NAMES: [&str; 4] = ["Error", "Warning", "Debug", "Verbose"];
const PREFIXES: [&str; 4] = ["Error: ", "Warning: ", "Debug: ", "Verbose: "];

impl Level {
    /// Failures the user must see.
    pub const ERROR: Self = Self(0);
    /// Recoverable problems.
    pub const WARNING: Self = Self(1);
    /// Diagnostics for developers.
    pub const DEBUG: Self = Self(2);
    /// Tracing output.
    pub const VERBOSE: Self = Self(3);

    /// Wraps a raw ordinal.
    #[must_use]
    pub const fn new(ordinal: u8) -> Self {
        Self(ordinal)
    }

    /// Maps a count of `-v` flags onto a console threshold.
    ///
    /// No flag keeps the console at errors only; each flag admits one more
    /// tier.
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        Self(count)
    }

    /// Returns the raw ordinal.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self.0
    }

    /// Returns the level name, or `None` for ordinals outside the named table.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        NAMES.get(usize::from(self.0)).copied()
    }

    /// Returns the text written between the timestamp and the message.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        PREFIXES.get(usize::from(self.0)).copied().unwrap_or("")
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<u8> for Level {
    fn from(ordinal: u8) -> Self {
        Self(ordinal)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// Error returned when a level token is neither a known name nor an ordinal.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown log level: \"{token}\"")]
pub struct ParseLevelError {
    token: String,
}

impl ParseLevelError {
    /// Returns the rejected token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::ERROR),
            "warning" | "warn" => Ok(Self::WARNING),
            "debug" => Ok(Self::DEBUG),
            "verbose" => Ok(Self::VERBOSE),
            other => other.parse::<u8>().map(Self).map_err(|_| ParseLevelError {
                token: token.to_owned(),
            }),
        }
    }
}
