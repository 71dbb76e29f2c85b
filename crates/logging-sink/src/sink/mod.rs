use std::fmt;

use crate::scratch::INLINE_CAPACITY;

mod constructors;
mod writing;

/// Largest encode buffer a sink keeps between writes.
///
/// Oversized messages grow the buffer past this size; it is released right
/// after the line is written so one large message does not pin memory.
pub(crate) const RETAINED_CAPACITY: usize = INLINE_CAPACITY + 256;

/// Destination that receives encoded [`LogLine`](crate::LogLine) values.
///
/// The sink owns the underlying writer together with a reusable encode
/// buffer. Each line is assembled completely before it reaches the writer and
/// is handed over in one `write_all` call, so a writer shared with other code
/// never sees a half-written line from this sink.
///
/// # Examples
///
/// ```
/// use logging_sink::{Level, LineSink, LogLine, Timestamp};
/// use time::macros::datetime;
///
/// let stamp = Timestamp::from_datetime(datetime!(2024-03-07 09:05:01 UTC));
/// let mut sink = LineSink::new(Vec::new());
/// sink.write(&LogLine::new(stamp, Level::WARNING, "low disk"))?;
///
/// assert_eq!(sink.into_inner(), b"07/03/24 09:05:01: Warning: low disk\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineSink<W> {
    writer: W,
    buffer: Vec<u8>,
}

impl<W> fmt::Debug for LineSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("writer", &self.writer)
            .field("buffered", &self.buffer.capacity())
            .finish()
    }
}
