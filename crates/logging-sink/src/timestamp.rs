//! crates/logging-sink/src/timestamp.rs
//! Wall-clock stamps in the `DD/MM/YY HH:MM:SS` layout.

use std::io::{self, Write};

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Text written when a stamp cannot be formatted.
const FALLBACK_TIMESTAMP: &[u8] = b"00/00/00 00:00:00";

/// Source of timestamps for log lines.
///
/// A clock built with [`LocalClock::new`] asks the platform for the local
/// UTC offset on every stamp, so daylight-saving changes show up in a
/// long-running process. On Unix the platform refuses that query once the
/// process has more than one thread; the clock then uses the offset it
/// captured at construction, or UTC if that was unavailable too.
/// [`LocalClock::with_offset`] pins an explicit offset instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LocalClock {
    offset: UtcOffset,
    follow_local: bool,
}

impl LocalClock {
    /// Creates a clock that tracks the process's local offset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
            follow_local: true,
        }
    }

    /// Creates a clock pinned to an explicit offset.
    #[must_use]
    pub const fn with_offset(offset: UtcOffset) -> Self {
        Self {
            offset,
            follow_local: false,
        }
    }

    /// Reports whether the clock re-reads the local offset for each stamp.
    #[must_use]
    pub const fn follows_local(&self) -> bool {
        self.follow_local
    }

    /// Returns the offset the next stamp will use.
    #[must_use]
    pub fn offset(&self) -> UtcOffset {
        if self.follow_local {
            UtcOffset::current_local_offset().unwrap_or(self.offset)
        } else {
            self.offset
        }
    }

    /// Captures the current time.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        Timestamp::from_datetime(OffsetDateTime::now_utc().to_offset(self.offset()))
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self::new()
    }
}

/// A captured point in time, rendered as `DD/MM/YY HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use logging_sink::Timestamp;
/// use time::macros::datetime;
///
/// let stamp = Timestamp::from_datetime(datetime!(2024-03-07 09:05:01 UTC));
/// assert_eq!(stamp.to_string(), "07/03/24 09:05:01");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Length in bytes of every rendered stamp.
    pub const RENDERED_LEN: usize = 17;

    /// Wraps an existing date-time.
    #[must_use]
    pub const fn from_datetime(datetime: OffsetDateTime) -> Self {
        Self(datetime)
    }

    /// Returns the wrapped date-time.
    #[must_use]
    pub const fn datetime(&self) -> OffsetDateTime {
        self.0
    }

    /// Writes the rendered stamp into `writer`.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        let mut rendered = [0u8; Self::RENDERED_LEN];
        let mut cursor = &mut rendered[..];
        let format = format_description!(
            "[day]/[month]/[year repr:last_two] [hour]:[minute]:[second]"
        );
        match self.0.format_into(&mut cursor, format) {
            Ok(Self::RENDERED_LEN) => writer.write_all(&rendered),
            _ => writer.write_all(FALLBACK_TIMESTAMP),
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rendered = Vec::with_capacity(Self::RENDERED_LEN);
        self.write_to(&mut rendered).map_err(|_| std::fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&rendered))
    }
}
