#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` holds the rendering primitives behind the leveled text
//! logger: severity [`Level`]s, wall-clock [`Timestamp`]s, the
//! [`LineScratch`] message buffer, the [`LogLine`] record and the
//! [`LineSink`] writer wrapper. The `logging` crate composes them into a
//! thread-safe logger.
//!
//! # Design
//!
//! Every event becomes one line of the form
//! `"<DD/MM/YY HH:MM:SS>: <prefix><message>\n"`. Messages are rendered by
//! [`LineScratch`] into a 16 KiB inline buffer; longer messages are measured
//! and rendered again into an exact-size heap buffer, so nothing is ever
//! truncated. A [`LineSink`] assembles the complete line before handing it to
//! its writer in a single call.
//!
//! # Invariants
//!
//! - [`Level`] ordering matches severity: a lower ordinal is more severe.
//! - Ordinals outside the named table render with an empty prefix.
//! - [`Timestamp`] always renders to exactly [`Timestamp::RENDERED_LEN`] bytes.
//!
//! # Errors
//!
//! Sink operations surface [`std::io::Error`] values from the underlying
//! writer. Rendering reports [`std::fmt::Error`] when a formatted value fails.
//! Deciding whether to swallow those errors is left to the caller.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{Level, LineScratch, LineSink, LogLine, Timestamp};
//! use time::macros::datetime;
//!
//! let mut scratch = LineScratch::new();
//! let message = scratch.render(format_args!("boom {}", 7)).unwrap();
//! let stamp = Timestamp::from_datetime(datetime!(2024-03-07 09:05:01 UTC));
//!
//! let mut sink = LineSink::new(Vec::new());
//! sink.write(&LogLine::new(stamp, Level::ERROR, message))?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "07/03/24 09:05:01: Error: boom 7\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod file;
mod level;
mod line;
mod scratch;
mod sink;
mod timestamp;

pub use file::{OpenMode, open_log_file};
pub use level::{Level, ParseLevelError};
pub use line::LogLine;
pub use scratch::{INLINE_CAPACITY, LineScratch};
pub use sink::LineSink;
pub use timestamp::{LocalClock, Timestamp};
