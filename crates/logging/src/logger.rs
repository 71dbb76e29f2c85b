//! crates/logging/src/logger.rs
//! The leveled logger: console threshold, optional file sink, one lock.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use logging_sink::{Level, LineSink, LocalClock, LogLine, open_log_file};

use crate::config::LoggerConfig;
use crate::error::InitError;
use crate::guard::LoggerGuard;
use crate::record::LogRecord;
use crate::thread_local::with_scratch;

/// Leveled text logger writing to the console and an optional file.
///
/// Every event becomes the line `"<DD/MM/YY HH:MM:SS>: <prefix><message>\n"`.
/// A line at level `L` is written to the console iff `L <= threshold`; once a
/// log file is configured it receives every line, whatever its level.
///
/// # Concurrency
///
/// The logger is `Send + Sync` and is normally shared by reference or through
/// the process-wide facade. The message is rendered before the internal lock
/// is taken; only the console and file writes happen under it. Lines
/// therefore never interleave, but their order follows lock acquisition, not
/// call order: two threads racing to log may appear in either order.
///
/// # Timestamps
///
/// Stamps use the local offset reported by the platform for each line. On
/// Unix that report is unavailable once the process is multi-threaded; the
/// logger then keeps the offset it saw when it was built, so a
/// daylight-saving change during the run is not reflected.
///
/// # Errors
///
/// Logging never fails from the caller's point of view. Formatting errors
/// drop the message; write errors on either sink are ignored.
///
/// # Examples
///
/// ```
/// use logging::{Level, Logger, LoggerConfig};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("app.log");
/// let logger = Logger::new(LoggerConfig::new(Level::ERROR).with_file(&path))?;
///
/// logger.verbose(format_args!("trace"));
/// logger.shutdown();
///
/// let contents = std::fs::read_to_string(&path)?;
/// assert!(contents.ends_with(": Verbose: trace\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Logger {
    threshold: Level,
    file_path: Option<PathBuf>,
    file_open: AtomicBool,
    clock: LocalClock,
    sinks: Mutex<Sinks>,
}

struct Sinks {
    console: LineSink<Box<dyn Write + Send>>,
    file: Option<LineSink<File>>,
}

impl Logger {
    /// Builds a logger that writes console lines to standard error.
    ///
    /// Opens the configured file, if any, using the configured
    /// [`OpenMode`](crate::OpenMode).
    pub fn new(config: LoggerConfig) -> Result<Self, InitError> {
        Self::with_console(config, io::stderr())
    }

    /// Builds a logger that writes console lines to `console`.
    pub fn with_console<W>(config: LoggerConfig, console: W) -> Result<Self, InitError>
    where
        W: Write + Send + 'static,
    {
        let file = match config.file_path() {
            Some(path) => {
                let file = open_log_file(path, config.open_mode).map_err(|source| {
                    InitError::OpenLogFile {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                Some((path.to_path_buf(), file))
            }
            None => None,
        };
        Ok(Self::assemble(config.level, file, Box::new(console)))
    }

    /// Builds a logger that only writes to standard error.
    #[must_use]
    pub fn console_only(level: Level) -> Self {
        Self::assemble(level, None, Box::new(io::stderr()))
    }

    fn assemble(
        threshold: Level,
        file: Option<(PathBuf, File)>,
        console: Box<dyn Write + Send>,
    ) -> Self {
        let (file_path, file) = match file {
            Some((path, file)) => (Some(path), Some(LineSink::new(file))),
            None => (None, None),
        };
        Self {
            threshold,
            file_open: AtomicBool::new(file.is_some()),
            file_path,
            clock: LocalClock::new(),
            sinks: Mutex::new(Sinks {
                console: LineSink::new(console),
                file,
            }),
        }
    }

    /// Returns the console threshold.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.threshold
    }

    /// Returns the configured log file path, if any.
    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Reports whether a line at `level` would be written anywhere.
    ///
    /// Callers use this to skip building expensive arguments.
    #[must_use]
    pub fn would_log(&self, level: Level) -> bool {
        level <= self.threshold || self.file_open.load(Ordering::Acquire)
    }

    /// Formats and dispatches one line at `level`.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let to_console = level <= self.threshold;
        if !to_console && !self.file_open.load(Ordering::Acquire) {
            return;
        }

        with_scratch(|scratch| {
            let Ok(message) = scratch.render(args) else {
                return;
            };
            let line = LogLine::new(self.clock.now(), level, message);

            let mut sinks = self.lock_sinks();
            if to_console {
                let _ = sinks.console.write(&line);
            }
            if let Some(file) = sinks.file.as_mut() {
                let _ = file.write(&line);
                let _ = file.flush();
            }
        });
    }

    /// Starts a line at `level` that is assembled with `write!` and logged
    /// when the returned record is dropped.
    pub fn record(&self, level: Level) -> LogRecord<'_> {
        LogRecord::new(self, level)
    }

    /// Logs at [`Level::ERROR`].
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::ERROR, args);
    }

    /// Logs at [`Level::WARNING`].
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Level::WARNING, args);
    }

    /// Logs at [`Level::DEBUG`].
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::DEBUG, args);
    }

    /// Logs at [`Level::VERBOSE`].
    pub fn verbose(&self, args: fmt::Arguments<'_>) {
        self.log(Level::VERBOSE, args);
    }

    /// Flushes and closes the log file.
    ///
    /// Safe to call any number of times: the file is detached from the logger
    /// before it is closed, so later calls find nothing to close. Afterwards
    /// the logger behaves as if no file had been configured, although
    /// [`log_file`](Self::log_file) still reports the original path.
    pub fn shutdown(&self) {
        let file = {
            let mut sinks = self.lock_sinks();
            self.file_open.store(false, Ordering::Release);
            sinks.file.take()
        };
        if let Some(mut file) = file {
            let _ = file.flush();
        }
    }

    /// Returns a guard that calls [`shutdown`](Self::shutdown) when dropped.
    pub fn guard(&self) -> LoggerGuard<'_> {
        LoggerGuard::new(self)
    }

    fn lock_sinks(&self) -> MutexGuard<'_, Sinks> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("file_path", &self.file_path)
            .field("file_open", &self.file_open.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
