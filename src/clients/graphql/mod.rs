//! GraphQL layer for the Pipefy API.
//!
//! This module sits on top of [`HttpClient`](crate::clients::HttpClient) and
//! speaks the GraphQL envelope: it serializes `{"query", "variables"}`,
//! and turns responses into either a [`GraphqlResponse`] or a [`GraphqlError`].
//!
//! # Overview
//!
//! - [`GraphqlClient`]: Sends one document per call
//! - [`GraphqlRequest`]: The request envelope
//! - [`GraphqlResponse`] and [`ApiError`]: The response envelope
//! - [`GraphqlOperationError`]: Raised for a non-empty `errors` array
//! - [`GraphqlError`]: Either a transport or an operation error
//!
//! # Response Structure
//!
//! - `data`: The query result data
//! - `errors`: GraphQL errors (usually with HTTP 200)
//! - `extensions`: Server-specific extras
//!
//! There is no retry: every call is one wire attempt.

mod client;
mod errors;
mod response;

pub use client::GraphqlClient;
pub use errors::{GraphqlError, GraphqlOperationError};
pub use response::{ApiError, ErrorLocation, GraphqlRequest, GraphqlResponse};
