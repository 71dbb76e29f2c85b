use std::io::{self, Write};

use super::{LineSink, RETAINED_CAPACITY};
use crate::line::LogLine;

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes a single newline-terminated line.
    ///
    /// The line is encoded into the sink's buffer first and reaches the writer
    /// through one `write_all` call.
    pub fn write(&mut self, line: &LogLine<'_>) -> io::Result<()> {
        self.buffer.clear();
        line.encode_into(&mut self.buffer);
        let result = self.writer.write_all(&self.buffer);
        if self.buffer.capacity() > RETAINED_CAPACITY {
            self.buffer = Vec::new();
        }
        result
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::timestamp::Timestamp;
    use time::macros::datetime;

    fn stamp() -> Timestamp {
        Timestamp::from_datetime(datetime!(2024-03-07 09:05:01 UTC))
    }

    fn make_sink() -> LineSink<Vec<u8>> {
        LineSink::new(Vec::new())
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk gone"))
        }
    }

    /// Counts `write` calls reaching the writer.
    #[derive(Default)]
    struct CountingWriter {
        bytes: Vec<u8>,
        calls: usize,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.calls += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_terminates_line_with_newline() {
        let mut sink = make_sink();
        sink.write(&LogLine::new(stamp(), Level::ERROR, "boom"))
            .unwrap();
        assert_eq!(sink.get_ref(), b"07/03/24 09:05:01: Error: boom\n");
    }

    #[test]
    fn consecutive_writes_stay_on_separate_lines() {
        let mut sink = make_sink();
        for (level, message) in [
            (Level::ERROR, "one"),
            (Level::WARNING, "two"),
            (Level::VERBOSE, "three"),
        ] {
            sink.write(&LogLine::new(stamp(), level, message)).unwrap();
        }
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(output.ends_with("Verbose: three\n"));
    }

    #[test]
    fn line_reaches_writer_in_one_call() {
        let mut sink = LineSink::new(CountingWriter::default());
        sink.write(&LogLine::new(stamp(), Level::DEBUG, "single"))
            .unwrap();
        assert_eq!(sink.get_ref().calls, 1);
        assert!(sink.get_ref().bytes.ends_with(b"Debug: single\n"));
    }

    #[test]
    fn oversized_line_releases_buffer() {
        let mut sink = make_sink();
        let body = "z".repeat(RETAINED_CAPACITY * 2);
        sink.write(&LogLine::new(stamp(), Level::ERROR, &body))
            .unwrap();
        assert_eq!(sink.buffer.capacity(), 0);
        assert!(sink.get_ref().len() > body.len());
    }

    #[test]
    fn writer_errors_are_reported() {
        let mut sink = LineSink::new(FailingWriter);
        let line = LogLine::new(stamp(), Level::ERROR, "lost");
        assert!(sink.write(&line).is_err());
        assert!(sink.flush().is_err());
    }

    #[test]
    fn get_mut_reaches_writer() {
        let mut sink = make_sink();
        sink.write(&LogLine::new(stamp(), Level::ERROR, "a")).unwrap();
        sink.get_mut().push(b'|');
        assert!(sink.get_ref().ends_with(b"a\n|"));
    }
}
