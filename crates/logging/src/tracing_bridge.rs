//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` ecosystem into a [`Logger`].
//!
//! Libraries that instrument themselves with `tracing` macros can feed the
//! same text log as the rest of the application. [`LoggerLayer`] is a
//! `tracing-subscriber` layer that renders each event's `message` field,
//! followed by any other fields as ` name=value`, and hands the text to a
//! [`Logger`] at the mapped level.
//!
//! | tracing | logger |
//! |---------|--------|
//! | `ERROR` | [`Level::ERROR`] |
//! | `WARN`  | [`Level::WARNING`] |
//! | `INFO`, `DEBUG` | [`Level::DEBUG`] |
//! | `TRACE` | [`Level::VERBOSE`] |
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{Level, LoggerConfig, init, init_tracing, global};
//!
//! let _guard = init(LoggerConfig::new(Level::WARNING))?;
//! init_tracing(global().expect("installed above"))?;
//!
//! tracing::warn!(attempt = 3, "retrying");
//! ```

use std::fmt::{self, Write as _};
use std::ops::Deref;

use logging_sink::Level;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::error::InitError;
use crate::logger::Logger;

/// A tracing layer that forwards events into a [`Logger`].
///
/// The layer holds anything that dereferences to a logger, typically an
/// `Arc<Logger>` or the `&'static Logger` returned by
/// [`global`](crate::global).
pub struct LoggerLayer<L> {
    logger: L,
}

impl<L> LoggerLayer<L>
where
    L: Deref<Target = Logger>,
{
    /// Creates a layer writing into `logger`.
    #[must_use]
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Maps a tracing level onto a logger level.
    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::ERROR,
            tracing::Level::WARN => Level::WARNING,
            tracing::Level::INFO | tracing::Level::DEBUG => Level::DEBUG,
            tracing::Level::TRACE => Level::VERBOSE,
        }
    }
}

impl<S, L> Layer<S> for LoggerLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Deref<Target = Logger> + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::map_level(event.metadata().level());
        if !self.logger.would_log(level) {
            return;
        }

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        self.logger.log(level, format_args!("{visitor}"));
    }
}

/// Collects the message and trailing fields of one event.
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

impl fmt::Display for LineVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        f.write_str(&self.fields)
    }
}

/// Installs a global `tracing` subscriber that forwards into `logger`.
///
/// # Errors
///
/// Returns [`InitError::SubscriberAlreadySet`] when another global subscriber
/// is already installed.
pub fn init_tracing<L>(logger: L) -> Result<(), InitError>
where
    L: Deref<Target = Logger> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .try_init()
        .map_err(|_| InitError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoggerConfig;
    use std::sync::Arc;
    use test_support::SharedBuffer;
    use tracing_subscriber::layer::SubscriberExt;

    fn bridged(level: Level) -> (Arc<Logger>, SharedBuffer) {
        let console = SharedBuffer::new();
        let logger =
            Arc::new(Logger::with_console(LoggerConfig::new(level), console.clone()).unwrap());
        (logger, console)
    }

    fn with_layer(logger: &Arc<Logger>, body: impl FnOnce()) {
        let subscriber =
            tracing_subscriber::registry().with(LoggerLayer::new(Arc::clone(logger)));
        tracing::subscriber::with_default(subscriber, body);
    }

    #[test]
    fn level_mapping() {
        type Bridge = LoggerLayer<Arc<Logger>>;
        assert_eq!(Bridge::map_level(&tracing::Level::ERROR), Level::ERROR);
        assert_eq!(Bridge::map_level(&tracing::Level::WARN), Level::WARNING);
        assert_eq!(Bridge::map_level(&tracing::Level::INFO), Level::DEBUG);
        assert_eq!(Bridge::map_level(&tracing::Level::DEBUG), Level::DEBUG);
        assert_eq!(Bridge::map_level(&tracing::Level::TRACE), Level::VERBOSE);
    }

    #[test]
    fn events_are_forwarded_with_prefix() {
        let (logger, console) = bridged(Level::WARNING);
        with_layer(&logger, || {
            tracing::error!("boom {}", 7);
            tracing::warn!("careful");
            tracing::info!("hidden");
        });

        let lines = console.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(": Error: boom 7"));
        assert!(lines[1].ends_with(": Warning: careful"));
    }

    #[test]
    fn extra_fields_follow_message() {
        let (logger, console) = bridged(Level::DEBUG);
        with_layer(&logger, || {
            tracing::debug!(attempt = 3, peer = "10.0.0.1", "retrying");
        });
        assert!(
            console
                .contents()
                .contains("Debug: retrying attempt=3 peer=10.0.0.1")
        );
    }

    #[test]
    fn trace_maps_to_verbose() {
        let (logger, console) = bridged(Level::VERBOSE);
        with_layer(&logger, || tracing::trace!("deep"));
        assert!(console.contents().contains("Verbose: deep"));
    }
}
