//! Diagnostic verbosity for the Pipefy client.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How much diagnostic output a client emits.
///
/// Levels are ordered from quietest to noisiest; a message is emitted when
/// its level is at or below the configured one. `Silent` disables all output
/// and is the default.
///
/// # Example
///
/// ```rust
/// use pipefy_api::LogLevel;
///
/// let level: LogLevel = "debug".parse().unwrap();
/// assert!(level.enables(LogLevel::Warn));
/// assert!(!level.enables(LogLevel::Trace));
/// assert_eq!(level.to_string(), "debug");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// No diagnostics.
    #[default]
    Silent,
    /// Failures only.
    Error,
    /// Failures and GraphQL errors.
    Warn,
    /// One line per operation.
    Info,
    /// Response status, headers, and bodies.
    Debug,
    /// Everything, including request documents.
    Trace,
}

impl LogLevel {
    /// Returns `true` if a message at `message_level` should be emitted
    /// under this configured level.
    #[must_use]
    pub fn enables(self, message_level: Self) -> bool {
        message_level != Self::Silent && message_level <= self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Silent => "silent",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ConfigError::InvalidLogLevel {
                level: s.to_string(),
            }),
        }
    }
}
