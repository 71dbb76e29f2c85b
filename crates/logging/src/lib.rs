#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a minimal leveled text logger. Messages are filtered by
//! severity, stamped with the local time and written to standard error and,
//! optionally, to a log file, one line per event:
//!
//! ```text
//! 07/03/24 09:05:01: Error: cannot bind port 8080
//! ```
//!
//! # Design
//!
//! A [`Logger`] owns a console threshold, an optional file sink and a single
//! mutex that serializes writes from every thread. Lines at or below the
//! threshold go to the console; the file, once configured, records
//! everything. Messages are type-checked `format_args!` calls rendered before
//! the lock is taken, into a per-thread 16 KiB inline buffer that spills to
//! an exact-size heap allocation for longer text.
//!
//! The logger is an ordinary value so tests and libraries can build their
//! own. Applications that want a single process-wide instance call [`init`]
//! once and log through the [`error_log!`], [`warning_log!`],
//! [`debug_log!`], [`verbose_log!`] and [`log_at!`] macros. A message built
//! over several statements goes through [`Logger::record`], whose
//! [`LogRecord`] accepts `write!` and emits one line when dropped.
//!
//! # Invariants
//!
//! - A line at level `L` reaches the console iff `L <= threshold`.
//! - With a file configured, every line reaches the file and is flushed
//!   before the lock is released.
//! - [`Logger::would_log`] agrees exactly with whether [`Logger::log`]
//!   writes anything.
//! - Lines never interleave; their order follows lock acquisition.
//! - The log file is closed at most once.
//!
//! # Errors
//!
//! Only setup fails: [`Logger::new`] and [`init`] report [`InitError`].
//! Logging calls swallow formatting and I/O failures so a diagnostic side
//! channel can never become a failure in the caller's path.
//!
//! # Examples
//!
//! ```
//! use logging::{Level, LoggerConfig, debug_log, error_log};
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("app.log");
//!
//! let _guard = logging::init(LoggerConfig::new(Level::WARNING).with_file(&path))?;
//!
//! error_log!("boom {}", 7);
//! debug_log!("only in the file");
//!
//! let contents = std::fs::read_to_string(&path)?;
//! assert_eq!(contents.lines().count(), 2);
//! assert!(contents.contains(": Error: boom 7\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # See also
//!
//! - `logging-sink` for the line rendering primitives.
//! - [`LoggerLayer`] (feature `tracing`) for forwarding `tracing` events.

mod config;
mod error;
mod global;
mod guard;
mod logger;
mod macros;
mod record;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use error::InitError;
pub use global::{global, init, log, log_file, log_level, test_log};
pub use guard::LoggerGuard;
pub use logger::Logger;
pub use record::LogRecord;
pub use logging_sink::{INLINE_CAPACITY, Level, OpenMode, ParseLevelError};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing};
