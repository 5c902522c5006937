//! Configuration types for the Pipefy API client.
//!
//! This module provides the configuration used to construct a
//! [`PipefyClient`](crate::PipefyClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PipefyConfig`]: The immutable configuration held by a client
//! - [`PipefyConfigBuilder`]: A builder for constructing [`PipefyConfig`] instances
//! - [`AccessToken`]: A validated personal access token with masked debug output
//! - [`EndpointUrl`]: A validated GraphQL endpoint URL
//! - [`LogLevel`]: Diagnostic verbosity
//!
//! # Example
//!
//! ```rust
//! use pipefy_api::{PipefyConfig, AccessToken, LogLevel};
//!
//! let config = PipefyConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .log_level(LogLevel::Debug)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), "https://app.pipefy.com/queries");
//! ```

mod log_level;
mod newtypes;

pub use log_level::LogLevel;
pub use newtypes::{AccessToken, EndpointUrl};

use crate::error::ConfigError;

/// Configuration for the Pipefy API client.
///
/// # Thread Safety
///
/// `PipefyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use pipefy_api::{PipefyConfig, AccessToken};
///
/// let config = PipefyConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// ```
#[derive(Clone, Debug)]
pub struct PipefyConfig {
    access_token: AccessToken,
    log_level: LogLevel,
    endpoint: EndpointUrl,
    user_agent_prefix: Option<String>,
}

impl PipefyConfig {
    /// Creates a new builder for constructing a `PipefyConfig`.
    #[must_use]
    pub fn builder() -> PipefyConfigBuilder {
        PipefyConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the diagnostic level.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PipefyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PipefyConfig>();
};

/// Builder for constructing [`PipefyConfig`] instances.
///
/// `access_token` is required. Everything else has a default.
///
/// # Defaults
///
/// - `log_level`: [`LogLevel::Silent`]
/// - `endpoint`: `https://app.pipefy.com/queries`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct PipefyConfigBuilder {
    access_token: Option<AccessToken>,
    log_level: Option<LogLevel>,
    endpoint: Option<EndpointUrl>,
    user_agent_prefix: Option<String>,
}

impl PipefyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the diagnostic level.
    #[must_use]
    pub const fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Overrides the GraphQL endpoint.
    ///
    /// Intended for proxies and test servers.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PipefyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<PipefyConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(PipefyConfig {
            access_token,
            log_level: self.log_level.unwrap_or_default(),
            endpoint: self.endpoint.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
