//! GraphQL client implementation for the Pipefy API.
//!
//! This module provides the [`GraphqlClient`] type, which sends one document
//! with its variables and classifies the response.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::graphql::{
    ApiError, GraphqlError, GraphqlOperationError, GraphqlRequest, GraphqlResponse,
};
use crate::clients::{
    HttpClient, HttpError, HttpRequest, HttpResponse, HttpResponseError, InvalidResponseBodyError,
};
use crate::config::{LogLevel, PipefyConfig};
use crate::diagnostics::Diagnostics;
use crate::error::ConfigError;

/// GraphQL client for the Pipefy API.
///
/// Response classification, in order:
///
/// 1. a JSON object with a non-empty `errors` array is a
///    [`GraphqlOperationError`], whatever the HTTP status;
/// 2. any other non-2xx status is an [`HttpResponseError`];
/// 3. a 2xx body that is not JSON, not an object, or has no `data` is an
///    [`InvalidResponseBodyError`];
/// 4. everything else is returned as a [`GraphqlResponse`].
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use pipefy_api::clients::graphql::GraphqlClient;
/// use serde_json::{json, Map};
///
/// let client = GraphqlClient::new(&config, Diagnostics::default())?;
///
/// let mut variables = Map::new();
/// variables.insert("id".into(), json!("301"));
/// let response = client
///     .query("showPipe", "query showPipe($id: ID!) { pipe(id: $id) { name } }", &variables)
///     .await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the HTTP transport cannot be built.
    pub fn new(config: &PipefyConfig, diagnostics: Diagnostics) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(config, diagnostics)?,
        })
    }

    /// Returns the endpoint URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        self.http_client.default_headers()
    }

    /// Returns the diagnostics handle.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        self.http_client.diagnostics()
    }

    /// Executes a GraphQL document with bound variables.
    ///
    /// `operation` is the catalog name, used to tag errors and diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Operation`] when the server reports errors, and
    /// [`GraphqlError::Http`] for every transport failure.
    pub async fn query(
        &self,
        operation: &'static str,
        document: &str,
        variables: &Map<String, Value>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let diagnostics = self.diagnostics();
        diagnostics.emit(LogLevel::Trace, Some(operation), || {
            format!("Document: {document} Variables: {}", Value::Object(variables.clone()))
        });

        let body = GraphqlRequest {
            query: document,
            variables,
        }
        .to_body();
        let request = HttpRequest::new(body).with_operation(operation);

        let response = self.http_client.request(request).await?;
        Self::classify(operation, &response, diagnostics)
    }

    fn classify(
        operation: &'static str,
        response: &HttpResponse,
        diagnostics: &Diagnostics,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let envelope = response
            .body
            .as_ref()
            .filter(|body| body.is_object())
            .and_then(|body| serde_json::from_value::<GraphqlResponse>(body.clone()).ok());

        if let Some(error) =
            Self::operation_error(operation, response.body.as_ref(), envelope.as_ref())
        {
            diagnostics.emit(LogLevel::Warn, Some(operation), || error.to_string());
            return Err(error.into());
        }

        if !response.is_ok() {
            let error = HttpResponseError {
                code: response.code,
                message: Self::serialize_error(response),
                error_reference: response.request_id().map(String::from),
            };
            diagnostics.emit(LogLevel::Error, Some(operation), || error.to_string());
            return Err(GraphqlError::Http(error.into()));
        }

        let invalid = |reason: &str| {
            diagnostics.emit(LogLevel::Error, Some(operation), || reason.to_string());
            GraphqlError::Http(HttpError::InvalidBody(InvalidResponseBodyError {
                code: response.code,
                reason: reason.to_string(),
            }))
        };

        let envelope = match (response.body.as_ref(), envelope) {
            (None, _) => return Err(invalid("body is not valid JSON")),
            (Some(_), None) => return Err(invalid("body is not a GraphQL response object")),
            (Some(_), Some(envelope)) => envelope,
        };

        if envelope.data.as_ref().map_or(true, Value::is_null) {
            return Err(invalid("response has neither data nor errors"));
        }

        diagnostics.emit(LogLevel::Info, Some(operation), || {
            format!("Completed with HTTP {}", response.code)
        });
        Ok(envelope)
    }

    /// Builds the operation error for a non-empty `errors` array.
    ///
    /// When the envelope did not decode, the raw entries are read one by one
    /// so their messages still reach the caller.
    fn operation_error(
        operation: &'static str,
        body: Option<&Value>,
        envelope: Option<&GraphqlResponse>,
    ) -> Option<GraphqlOperationError> {
        let (errors, data) = match envelope {
            Some(envelope) => (envelope.errors().to_vec(), envelope.data.clone()),
            None => {
                let body = body?;
                let errors: Vec<ApiError> = body
                    .get("errors")?
                    .as_array()?
                    .iter()
                    .map(ApiError::from_raw)
                    .collect();
                (errors, body.get("data").cloned())
            }
        };
        if errors.is_empty() {
            return None;
        }
        Some(GraphqlOperationError {
            operation,
            errors,
            data: data.filter(|data| !data.is_null()),
        })
    }

    /// Serializes an error response into a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = Map::new();

        if let Some(body) = response.body.as_ref().filter(|b| b.is_object()) {
            for key in ["error", "error_description", "message"] {
                if let Some(value) = body.get(key) {
                    error_body.insert(key.to_string(), value.clone());
                }
            }
        } else if !response.raw_body.trim().is_empty() {
            let snippet: String = response.raw_body.chars().take(200).collect();
            error_body.insert("body".to_string(), Value::String(snippet));
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                Value::String(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        Value::Object(error_body).to_string()
    }
}
