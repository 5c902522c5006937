//! HTTP request types for the Pipefy API client.
//!
//! This module provides the [`HttpRequest`] type. Every request is a JSON
//! `POST` to the configured endpoint, so only the body varies.

use serde_json::Value;

/// An HTTP request to be sent to the Pipefy endpoint.
///
/// # Example
///
/// ```rust
/// use pipefy_api::clients::HttpRequest;
/// use serde_json::json;
///
/// let request = HttpRequest::new(json!({"query": "query getMe { me { id } }", "variables": {}}))
///     .with_operation("getMe");
///
/// assert_eq!(request.operation, Some("getMe"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The JSON request body.
    pub body: Value,
    /// Catalog name of the operation, used for diagnostics.
    pub operation: Option<&'static str>,
}

impl HttpRequest {
    /// Creates a request carrying `body`.
    #[must_use]
    pub fn new(body: impl Into<Value>) -> Self {
        Self {
            body: body.into(),
            operation: None,
        }
    }

    /// Tags the request with the catalog operation it carries.
    #[must_use]
    pub fn with_operation(mut self, name: &'static str) -> Self {
        self.operation = Some(name);
        self
    }
}
