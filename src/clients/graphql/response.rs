//! GraphQL request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::null_as_default;

/// The JSON body sent for every operation: `{"query": ..., "variables": ...}`.
///
/// Built per call and discarded after sending.
#[derive(Clone, Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    /// The GraphQL document.
    pub query: &'a str,
    /// Values for the document's `$variables`.
    pub variables: &'a Map<String, Value>,
}

impl GraphqlRequest<'_> {
    /// Builds the JSON body.
    #[must_use]
    pub fn to_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), Value::String(self.query.to_string()));
        body.insert("variables".to_string(), Value::Object(self.variables.clone()));
        Value::Object(body)
    }
}

/// A standard GraphQL response envelope.
///
/// `data` may be partially populated even when `errors` is non-empty.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct GraphqlResponse {
    /// The result of the operation.
    #[serde(default)]
    pub data: Option<Value>,
    /// Errors reported by the server, in order.
    #[serde(default)]
    pub errors: Option<Vec<ApiError>>,
    /// Server-specific extensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphqlResponse {
    /// Returns the reported errors, or an empty slice.
    #[must_use]
    pub fn errors(&self) -> &[ApiError] {
        self.errors.as_deref().unwrap_or_default()
    }

    /// Returns `true` if the server reported at least one error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }
}

/// A location in the GraphQL document an error refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorLocation {
    /// 1-based line.
    #[serde(default)]
    pub line: Option<u32>,
    /// 1-based column.
    #[serde(default)]
    pub column: Option<u32>,
}

/// One entry of a GraphQL `errors` array.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ApiError {
    /// Human readable description.
    pub message: String,
    /// Where in the document the error occurred.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub locations: Vec<ErrorLocation>,
    /// Path to the response field that failed.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub path: Vec<Value>,
    /// Server-specific details such as an error `code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl ApiError {
    /// Reads one raw `errors` entry, keeping its `message` and `extensions`
    /// when the entry does not match the typed shape.
    #[must_use]
    pub fn from_raw(entry: &Value) -> Self {
        serde_json::from_value(entry.clone()).unwrap_or_else(|_| Self {
            message: entry
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(|| entry.to_string(), String::from),
            locations: Vec::new(),
            path: Vec::new(),
            extensions: entry.get("extensions").filter(|ext| ext.is_object()).cloned(),
        })
    }

    /// Returns `extensions.code`, if the server supplied one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(Value::as_str)
    }

    /// Returns `true` if this error reports a missing record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.code(), Some("NOT_FOUND" | "RESOURCE_NOT_FOUND"))
            || self.message.to_lowercase().contains("not found")
    }
}
