//! crates/logging-sink/src/line.rs
//! The `<timestamp>: <prefix><message>` record written by every sink.

use crate::level::Level;
use crate::timestamp::Timestamp;

/// Separator between the timestamp and the level prefix.
const STAMP_SEPARATOR: &[u8] = b": ";

/// One fully rendered log event, borrowed from the caller.
///
/// The encoded form is `"<DD/MM/YY HH:MM:SS>: <prefix><message>\n"`, where the
/// prefix comes from [`Level::prefix`]. The message is copied verbatim, so
/// any newlines the caller embedded are preserved.
#[derive(Clone, Copy, Debug)]
pub struct LogLine<'a> {
    timestamp: Timestamp,
    level: Level,
    message: &'a str,
}

impl<'a> LogLine<'a> {
    /// Bundles the parts of a line.
    #[must_use]
    pub const fn new(timestamp: Timestamp, level: Level, message: &'a str) -> Self {
        Self {
            timestamp,
            level,
            message,
        }
    }

    /// Returns the stamp captured for the event.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the event's level.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the rendered message text.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Returns the encoded length, including the trailing newline.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        Timestamp::RENDERED_LEN
            + STAMP_SEPARATOR.len()
            + self.level.prefix().len()
            + self.message.len()
            + 1
    }

    /// Appends the encoded line and its `\n` terminator to `buffer`.
    pub fn encode_into(&self, buffer: &mut Vec<u8>) {
        buffer.reserve(self.encoded_len());
        // Writing into a Vec cannot fail.
        let _ = self.timestamp.write_to(buffer);
        buffer.extend_from_slice(STAMP_SEPARATOR);
        buffer.extend_from_slice(self.level.prefix().as_bytes());
        buffer.extend_from_slice(self.message.as_bytes());
        buffer.push(b'\n');
    }
}
