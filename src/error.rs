//! Error types for the Pipefy API client.
//!
//! This module contains the configuration error raised while building a
//! client and the top-level [`PipefyError`] returned by every operation.
//!
//! # Error Handling
//!
//! Every operation returns `Result<T, PipefyError>`. The variants map one to
//! one onto the failure kinds a caller has to tell apart:
//!
//! - [`PipefyError::Config`]: the client could not be configured
//! - [`PipefyError::Validation`]: parameters were rejected before any network I/O
//! - [`PipefyError::Transport`]: the HTTP round trip failed
//! - [`PipefyError::Operation`]: the API answered with a GraphQL `errors` array
//! - [`PipefyError::UnexpectedPayload`]: the `data` payload did not match the
//!   operation's typed shape
//!
//! # Example
//!
//! ```rust
//! use pipefy_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

use crate::clients::graphql::{GraphqlError, GraphqlOperationError};
use crate::clients::HttpError;
use crate::operations::ValidationError;

/// Errors that can occur while configuring the client.
///
/// These are raised synchronously, before any request can be made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Pipefy personal access token.")]
    EmptyAccessToken,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide an http(s) URL (e.g., 'https://app.pipefy.com/queries').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Log level is not one of the supported names.
    #[error("Invalid log level '{level}'. Expected one of: silent, error, warn, info, debug, trace.")]
    InvalidLogLevel {
        /// The invalid level string that was provided.
        level: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP transport could not be initialised.
    #[error("Failed to initialise HTTP transport: {reason}")]
    TransportInit {
        /// Why the transport could not be built.
        reason: String,
    },
}

/// Unified error type returned by every [`PipefyClient`](crate::PipefyClient) operation.
///
/// # Example
///
/// ```rust,ignore
/// use pipefy_api::PipefyError;
///
/// match client.get_card_by_id("123".into()).await {
///     Ok(card) => println!("{:?}", card),
///     Err(PipefyError::Validation(e)) => println!("bad input: {e}"),
///     Err(PipefyError::Operation(e)) => println!("API rejected it: {:?}", e.messages()),
///     Err(e) => println!("other failure: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum PipefyError {
    /// Client configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Parameters failed local validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network failure, non-2xx status, or unparseable body.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The API returned a non-empty `errors` array.
    #[error(transparent)]
    Operation(#[from] GraphqlOperationError),

    /// The `data` payload could not be decoded into the operation's result type.
    #[error("Unexpected payload for operation '{operation}': {source}")]
    UnexpectedPayload {
        /// The catalog name of the operation.
        operation: &'static str,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

impl PipefyError {
    /// Returns `true` if this is a local validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` if this is a transport failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if the API answered with GraphQL errors.
    #[must_use]
    pub const fn is_operation(&self) -> bool {
        matches!(self, Self::Operation(_))
    }
}

impl From<GraphqlError> for PipefyError {
    fn from(error: GraphqlError) -> Self {
        match error {
            GraphqlError::Http(e) => Self::Transport(e),
            GraphqlError::Operation(e) => Self::Operation(e),
        }
    }
}
