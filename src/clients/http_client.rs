//! HTTP client for Pipefy API communication.
//!
//! This module provides the [`HttpClient`] type, which sends one
//! authenticated JSON `POST` per request to the configured endpoint.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{LogLevel, PipefyConfig};
use crate::diagnostics::Diagnostics;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Pipefy API.
///
/// The client handles:
/// - The `Authorization: Bearer <token>` header, computed once
/// - Default headers including User-Agent, Accept, and Content-Type
/// - Response capture (status, headers, raw and parsed body)
///
/// It performs exactly one attempt per request. Non-2xx responses are
/// returned as [`HttpResponse`] values so the GraphQL layer can inspect any
/// error envelope they carry; only network failures are errors here.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full endpoint URL.
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Diagnostic output.
    diagnostics: Diagnostics,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use pipefy_api::{AccessToken, PipefyConfig};
    /// use pipefy_api::clients::HttpClient;
    /// use pipefy_api::diagnostics::Diagnostics;
    ///
    /// let config = PipefyConfig::builder()
    ///     .access_token(AccessToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config, Diagnostics::default()).unwrap();
    /// assert_eq!(client.endpoint(), "https://app.pipefy.com/queries");
    /// ```
    pub fn new(config: &PipefyConfig, diagnostics: Diagnostics) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Pipefy API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.access_token().bearer_header(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::TransportInit {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
            default_headers,
            diagnostics,
        })
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the diagnostics handle shared with higher layers.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Sends a request to the Pipefy API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request cannot be sent or the
    /// response body cannot be read.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let operation = request.operation;

        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.body(request.body.to_string());

        let res = req_builder.send().await.map_err(|e| {
            self.diagnostics
                .emit(LogLevel::Error, operation, || format!("Request failed: {e}"));
            HttpError::Network(e)
        })?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let raw_body = res.text().await?;

        self.diagnostics
            .emit(LogLevel::Debug, operation, || format!("Status: {code}"));
        self.diagnostics
            .emit(LogLevel::Debug, operation, || format!("Headers: {res_headers:?}"));
        self.diagnostics
            .emit(LogLevel::Debug, operation, || format!("Response: {raw_body}"));

        Ok(HttpResponse::new(code, res_headers, raw_body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
