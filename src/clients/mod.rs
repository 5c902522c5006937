//! HTTP and GraphQL client types for Pipefy API communication.
//!
//! This module provides the transport layer used by
//! [`PipefyClient`](crate::PipefyClient). It handles request building, the
//! bearer header, response capture, and GraphQL envelope classification.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client; one `POST` per request
//! - [`HttpRequest`]: A request to be sent to the endpoint
//! - [`HttpResponse`]: The captured response
//! - [`graphql::GraphqlClient`]: Sends GraphQL documents and classifies responses
//! - [`HttpError`]: Transport error type
//!
//! # Retry Behavior
//!
//! None. Each call is a single attempt and failures are reported directly.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidResponseBodyError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::HttpRequest;
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
