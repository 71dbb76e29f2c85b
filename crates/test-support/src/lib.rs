//! Shared helpers for the workspace's unit and integration tests.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tempfile::TempDir;

/// Creates a temporary directory removed when the handle is dropped.
///
/// # Panics
///
/// Panics when the platform refuses to create a temporary directory.
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("create temporary directory")
}

/// Returns a path named `name` inside `dir`.
pub fn log_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

/// Reads a log file into its lines.
///
/// # Panics
///
/// Panics when the file cannot be read as UTF-8.
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read log file")
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Clonable in-memory writer; every clone appends to the same buffer.
///
/// Useful as a console stand-in: hand one clone to the code under test and
/// inspect the other.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the buffer decoded as UTF-8, replacing invalid sequences.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// Returns the buffer split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Reports whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Splits a log line into its timestamp and the text after `": "`.
///
/// Returns `None` unless the line starts with a well-formed
/// `DD/MM/YY HH:MM:SS` stamp followed by `": "`.
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    let stamp = line.get(..17)?;
    let rest = line.get(17..)?.strip_prefix(": ")?;
    is_timestamp(stamp).then_some((stamp, rest))
}

/// Reports whether `text` matches the `DD/MM/YY HH:MM:SS` layout.
pub fn is_timestamp(text: &str) -> bool {
    const LAYOUT: &[u8; 17] = b"dd/dd/dd dd:dd:dd";
    let bytes = text.as_bytes();
    bytes.len() == LAYOUT.len()
        && bytes.iter().zip(LAYOUT).all(|(&byte, &expected)| match expected {
            b'd' => byte.is_ascii_digit(),
            other => byte == other,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_buffer_clones_share_storage() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"one\ntwo\n").unwrap();
        assert_eq!(buffer.lines(), vec!["one", "two"]);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn split_line_accepts_well_formed_lines() {
        let line = "07/03/24 09:05:01: Error: boom";
        assert_eq!(split_line(line), Some(("07/03/24 09:05:01", "Error: boom")));
    }

    #[test]
    fn split_line_rejects_malformed_lines() {
        assert_eq!(split_line("boom"), None);
        assert_eq!(split_line("07/03/24 09:05:01 Error"), None);
        assert_eq!(split_line("07-03-24 09:05:01: Error: boom"), None);
    }

    #[test]
    fn read_lines_returns_file_lines() {
        let dir = scratch_dir();
        let path = log_path(&dir, "lines.log");
        std::fs::write(&path, "a\nb\n").unwrap();
        assert_eq!(read_lines(&path), vec!["a", "b"]);
    }
}
