//! HTTP-specific error types for the Pipefy API client.
//!
//! This module contains error types for the transport layer: non-successful
//! responses, unparseable bodies, and network failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses without a GraphQL error envelope
//! - [`InvalidResponseBodyError`]: A body that is not a GraphQL JSON envelope
//! - [`HttpError`]: Unified error type encompassing all transport errors
//!
//! Transport errors are never retried by the client.
//!
//! # Example
//!
//! ```rust,ignore
//! use pipefy_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidBody(e)) => println!("Bad body: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-successful status and no
/// GraphQL error envelope.
///
/// The message field contains a JSON object built from whichever of the
/// `error`, `error_description` and `message` fields the body carried, plus an
/// `error_reference` when the response had an `X-Request-Id` header.
///
/// # Example
///
/// ```rust
/// use pipefy_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"error":"Unauthorized"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().contains("401"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when a response body is not a usable GraphQL envelope.
///
/// This covers non-JSON bodies, JSON that is not an object, and objects with
/// neither `data` nor `errors`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid response body (HTTP {code}): {reason}")]
pub struct InvalidResponseBodyError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// What was wrong with the body.
    pub reason: String,
}

/// Unified error type for all transport errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response without a GraphQL error envelope.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The body could not be interpreted.
    #[error(transparent)]
    InvalidBody(#[from] InvalidResponseBodyError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidBody(e) => Some(e.code),
            Self::Network(_) => None,
        }
    }
}
