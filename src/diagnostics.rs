//! Injectable diagnostics for the Pipefy client.
//!
//! The client never configures a process-wide logger. Each client owns a
//! [`Diagnostics`] handle made of a [`LogLevel`] filter and a
//! [`DiagnosticSink`]. The default sink, [`TracingSink`], forwards events to
//! `tracing` under the `pipefy_api` target, so applications decide where the
//! output goes by installing their own subscriber.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use pipefy_api::diagnostics::{DiagnosticEvent, DiagnosticSink};
//!
//! #[derive(Default)]
//! struct Collect(Mutex<Vec<String>>);
//!
//! impl DiagnosticSink for Collect {
//!     fn record(&self, event: &DiagnosticEvent<'_>) {
//!         self.0.lock().unwrap().push(event.message.to_string());
//!     }
//! }
//!
//! let sink = Arc::new(Collect::default());
//! // PipefyClient::with_sink(config, sink.clone())
//! ```

use std::fmt;
use std::sync::Arc;

use crate::config::LogLevel;

/// A single diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticEvent<'a> {
    /// Severity of the message. Never [`LogLevel::Silent`].
    pub level: LogLevel,
    /// Catalog name of the operation in flight, if any.
    pub operation: Option<&'a str>,
    /// The rendered message.
    pub message: &'a str,
}

/// Receives diagnostic events that passed the client's level filter.
pub trait DiagnosticSink: Send + Sync {
    /// Records one event.
    fn record(&self, event: &DiagnosticEvent<'_>);
}

/// Forwards events to the `tracing` ecosystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &DiagnosticEvent<'_>) {
        let operation = event.operation.unwrap_or("-");
        match event.level {
            LogLevel::Silent => {}
            LogLevel::Error => {
                tracing::error!(target: "pipefy_api", operation, "{}", event.message);
            }
            LogLevel::Warn => {
                tracing::warn!(target: "pipefy_api", operation, "{}", event.message);
            }
            LogLevel::Info => {
                tracing::info!(target: "pipefy_api", operation, "{}", event.message);
            }
            LogLevel::Debug => {
                tracing::debug!(target: "pipefy_api", operation, "{}", event.message);
            }
            LogLevel::Trace => {
                tracing::trace!(target: "pipefy_api", operation, "{}", event.message);
            }
        }
    }
}

/// A level filter paired with a sink.
///
/// Cheap to clone; clones share the sink.
#[derive(Clone)]
pub struct Diagnostics {
    level: LogLevel,
    sink: Arc<dyn DiagnosticSink>,
}

impl Diagnostics {
    /// Creates a handle that sends events at or below `level` to `sink`.
    #[must_use]
    pub fn new(level: LogLevel, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { level, sink }
    }

    /// Creates a handle backed by [`TracingSink`].
    #[must_use]
    pub fn tracing(level: LogLevel) -> Self {
        Self::new(level, Arc::new(TracingSink))
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns `true` if messages at `level` would be recorded.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level.enables(level)
    }

    /// Records a message if `level` passes the filter.
    ///
    /// The message closure only runs when the event is recorded, so callers
    /// can format response bodies without paying for it at `Silent`.
    pub fn emit<F>(&self, level: LogLevel, operation: Option<&str>, message: F)
    where
        F: FnOnce() -> String,
    {
        if !self.enabled(level) {
            return;
        }
        let message = message();
        self.sink.record(&DiagnosticEvent {
            level,
            operation,
            message: &message,
        });
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::tracing(LogLevel::Silent)
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

// Verify Diagnostics is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Diagnostics>();
};
