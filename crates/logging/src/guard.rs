use std::ops::Deref;

use crate::logger::Logger;

/// Scoped handle that closes a [`Logger`]'s file when dropped.
///
/// Returned by [`Logger::guard`] and [`init`](crate::init). Holding the guard
/// in the composition root ties the file's lifetime to that scope, so the
/// final flush happens on every exit path, including early returns and
/// unwinding. The guard dereferences to the logger, so it can be used for
/// logging directly.
///
/// # Examples
///
/// ```
/// use logging::{Level, Logger, LoggerConfig};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("run.log");
/// let logger = Logger::new(LoggerConfig::new(Level::ERROR).with_file(&path))?;
/// {
///     let log = logger.guard();
///     log.debug(format_args!("working"));
/// }
/// assert!(!logger.would_log(Level::DEBUG));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use = "dropping the guard immediately closes the log file"]
pub struct LoggerGuard<'a> {
    logger: &'a Logger,
}

impl<'a> LoggerGuard<'a> {
    pub(crate) const fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }

    /// Returns the guarded logger.
    #[must_use]
    pub const fn logger(&self) -> &'a Logger {
        self.logger
    }
}

impl Drop for LoggerGuard<'_> {
    fn drop(&mut self) {
        self.logger.shutdown();
    }
}

impl Deref for LoggerGuard<'_> {
    type Target = Logger;

    fn deref(&self) -> &Self::Target {
        self.logger
    }
}

impl std::fmt::Debug for LoggerGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LoggerGuard").field(self.logger).finish()
    }
}
