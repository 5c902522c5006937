//! GraphQL-specific error types for the Pipefy API client.
//!
//! This module contains the error raised when the API answers with a
//! non-empty `errors` array, and the [`GraphqlError`] returned by
//! [`GraphqlClient`](super::GraphqlClient).
//!
//! # Error Handling
//!
//! - [`GraphqlError::Http`]: Wraps transport errors
//! - [`GraphqlError::Operation`]: The server rejected the operation
//!
//! # Example
//!
//! ```rust,ignore
//! use pipefy_api::clients::graphql::GraphqlError;
//!
//! match client.query("getMe", document, &variables).await {
//!     Ok(response) => println!("Data: {:?}", response.data),
//!     Err(GraphqlError::Operation(e)) => println!("Rejected: {:?}", e.messages()),
//!     Err(GraphqlError::Http(e)) => println!("HTTP error: {}", e),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::clients::graphql::ApiError;
use crate::clients::HttpError;

/// Error returned when a well-formed response carries a non-empty `errors` array.
///
/// Any partially populated `data` is passed through alongside the errors.
///
/// # Example
///
/// ```rust
/// use pipefy_api::clients::graphql::{ApiError, GraphqlOperationError};
///
/// let error = GraphqlOperationError {
///     operation: "deletePipe",
///     errors: vec![ApiError {
///         message: "Pipe not found".to_string(),
///         locations: Vec::new(),
///         path: Vec::new(),
///         extensions: None,
///     }],
///     data: None,
/// };
///
/// assert!(error.is_not_found());
/// assert!(error.to_string().contains("Pipe not found"));
/// ```
#[derive(Debug, Error)]
#[error("GraphQL operation '{operation}' failed: {}", join_messages(.errors))]
pub struct GraphqlOperationError {
    /// Catalog name of the operation.
    pub operation: &'static str,
    /// Every error the server returned, in order.
    pub errors: Vec<ApiError>,
    /// Partially populated `data`, if any.
    pub data: Option<Value>,
}

impl GraphqlOperationError {
    /// Returns the server messages in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Returns `true` if every error reports a missing record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        !self.errors.is_empty() && self.errors.iter().all(ApiError::is_not_found)
    }
}

fn join_messages(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no error details".to_string();
    }
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error type for GraphQL operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server returned GraphQL errors.
    #[error(transparent)]
    Operation(#[from] GraphqlOperationError),
}
