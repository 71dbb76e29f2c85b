//! crates/logging-sink/src/file.rs
//! Opening the optional log file.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Policy for existing content when the log file is opened.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OpenMode {
    /// Discard previous content.
    #[default]
    Truncate,
    /// Keep previous content and write after it.
    Append,
}

impl OpenMode {
    /// Reports whether existing content is preserved.
    #[must_use]
    pub const fn is_append(self) -> bool {
        matches!(self, Self::Append)
    }
}

impl From<bool> for OpenMode {
    /// `true` selects [`OpenMode::Append`].
    fn from(append: bool) -> Self {
        if append { Self::Append } else { Self::Truncate }
    }
}

/// Opens `path` for writing log lines, creating it if missing.
///
/// # Examples
///
/// ```
/// use logging_sink::{OpenMode, open_log_file};
/// use std::io::Write;
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("app.log");
///
/// open_log_file(&path, OpenMode::Truncate)?.write_all(b"first\n")?;
/// open_log_file(&path, OpenMode::Append)?.write_all(b"second\n")?;
/// assert_eq!(std::fs::read_to_string(&path)?, "first\nsecond\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn open_log_file(path: &Path, mode: OpenMode) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        OpenMode::Append => options.append(true),
        OpenMode::Truncate => options.write(true).truncate(true),
    };
    options.open(path)
}
