//! # Pipefy API Rust Client
//!
//! A typed async client for the [Pipefy](https://www.pipefy.com) GraphQL API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PipefyConfig`] and [`PipefyConfigBuilder`]
//! - A validated, debug-masked personal [`AccessToken`]
//! - [`PipefyClient`], with one async method per supported query and mutation
//! - A static catalog of parameterized GraphQL documents in [`operations`]
//! - Local parameter validation before any request is sent
//! - Serde models for users, organizations, pipes, phases, cards, labels,
//!   comments, pipe relations and webhooks in [`models`]
//! - Injectable diagnostics filtered by [`LogLevel`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pipefy_api::{AccessToken, LogLevel, PipefyClient, PipefyConfig};
//! use pipefy_api::operations::inputs::CreateCardInput;
//! use pipefy_api::Id;
//!
//! # async fn run() -> Result<(), pipefy_api::PipefyError> {
//! let config = PipefyConfig::builder()
//!     .access_token(AccessToken::new("your-personal-access-token")?)
//!     .log_level(LogLevel::Info)
//!     .build()?;
//! let client = PipefyClient::new(config)?;
//!
//! let created = client
//!     .create_card(&CreateCardInput {
//!         pipe_id: Id::from(301_u64),
//!         title: "New hire: Ana".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! if let Some(id) = created.card.and_then(|card| card.id) {
//!     let card = client.get_card_by_id(&id).await?;
//!     println!("{:?}", card.and_then(|c| c.current_phase));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<T, PipefyError>`:
//!
//! - [`PipefyError::Validation`]: bad parameters, caught before any network I/O
//! - [`PipefyError::Transport`]: network failures, non-2xx responses, bodies
//!   that are not GraphQL envelopes
//! - [`PipefyError::Operation`]: the API answered with GraphQL `errors`
//! - [`PipefyError::UnexpectedPayload`]: `data` did not match the typed result
//!
//! Delete operations are idempotent: deleting a record that is already gone
//! returns [`DeleteOutcome::AlreadyAbsent`].
//!
//! ## Logging
//!
//! The library never installs a logger. By default each client forwards
//! diagnostics at or below its configured [`LogLevel`] to `tracing` under the
//! `pipefy_api` target; pass a custom
//! [`DiagnosticSink`](diagnostics::DiagnosticSink) to
//! [`PipefyClient::with_sink`] to capture them elsewhere.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction, parameters
//!   validate before sending
//! - **No string-built queries**: values always travel as GraphQL variables
//! - **One attempt per call**: no retries, no automatic pagination
//! - **Thread-safe**: the client is `Send + Sync`

mod client;
pub mod clients;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod operations;

// Re-export public types at crate root for convenience
pub use client::PipefyClient;
pub use config::{AccessToken, EndpointUrl, LogLevel, PipefyConfig, PipefyConfigBuilder};
pub use error::{ConfigError, PipefyError};
pub use models::{Connection, DeleteOutcome, Id, PageInfo};
pub use operations::ValidationError;

// Re-export transport and GraphQL error types
pub use clients::graphql::{ApiError, GraphqlOperationError};
pub use clients::{HttpError, HttpResponseError, InvalidResponseBodyError};
