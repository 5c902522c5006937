//! HTTP response types for the Pipefy API client.
//!
//! This module provides the [`HttpResponse`] type, a status code plus the
//! headers and body captured from a single round trip.

use std::collections::HashMap;

/// An HTTP response from the Pipefy endpoint.
///
/// The body is kept both raw and, when it parses, as JSON. Interpreting the
/// GraphQL envelope is left to the GraphQL layer.
///
/// # Example
///
/// ```rust
/// use pipefy_api::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"data":{"me":null}}"#.to_string());
/// assert!(response.is_ok());
/// assert!(response.body.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The body parsed as JSON, if it was valid JSON.
    pub body: Option<serde_json::Value>,
    /// The body exactly as received.
    pub raw_body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing `raw_body` as JSON when possible.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, raw_body: String) -> Self {
        let body = if raw_body.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&raw_body).ok()
        };

        Self {
            code,
            headers,
            body,
            raw_body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
