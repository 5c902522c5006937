//! The Pipefy API client.
//!
//! [`PipefyClient`] exposes one async method per catalog operation, grouped
//! by resource:
//!
//! - account: [`get_me`](PipefyClient::get_me), [`set_role`](PipefyClient::set_role)
//! - organizations: list, show, create, update, delete
//! - pipes: list, show, clone, create, update, delete, plus labels
//! - phases: show, create, update, delete, plus phase fields
//! - cards: page, show, create, update, delete, move, update field, plus comments
//! - pipe relations: list, create, update, delete
//! - webhooks: create, update, delete
//!
//! Every method validates its parameters locally, sends exactly one request,
//! and decodes the payload found under the operation's root field. Operations
//! without a typed method can be run through [`PipefyClient::execute`].

mod cards;
mod organizations;
mod phases;
mod pipe_relations;
mod pipes;
mod users;
mod webhooks;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::graphql::{GraphqlClient, GraphqlResponse};
use crate::config::{AccessToken, LogLevel, PipefyConfig};
use crate::diagnostics::{DiagnosticSink, Diagnostics};
use crate::error::{ConfigError, PipefyError};
use crate::models::{DeleteOutcome, DeletePayload, Id};
use crate::operations::inputs::{to_variables, Variables};
use crate::operations::{self, OperationSpec, ValidationError};

/// Async client for the Pipefy GraphQL API.
///
/// All methods take `&self`; share one client across tasks with an `Arc` or
/// by reference. Calls are independent: await one before starting another
/// that depends on its result.
///
/// # Thread Safety
///
/// `PipefyClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,no_run
/// use pipefy_api::{Id, PipefyClient};
///
/// # async fn run() -> Result<(), pipefy_api::PipefyError> {
/// let client = PipefyClient::from_access_token("my-personal-token")?;
///
/// let me = client.get_me().await?;
/// println!("Signed in as {:?}", me.email);
///
/// if let Some(card) = client.get_card_by_id(&Id::from(1234_u64)).await? {
///     println!("{:?} is in {:?}", card.title, card.current_phase);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PipefyClient {
    config: PipefyConfig,
    authorization: String,
    graphql: GraphqlClient,
}

impl fmt::Debug for PipefyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipefyClient")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint())
            .finish_non_exhaustive()
    }
}

// Verify PipefyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PipefyClient>();
};

impl PipefyClient {
    /// Creates a client that reports diagnostics through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the HTTP transport cannot be built.
    pub fn new(config: PipefyConfig) -> Result<Self, ConfigError> {
        let diagnostics = Diagnostics::tracing(config.log_level());
        Self::with_diagnostics(config, diagnostics)
    }

    /// Creates a client that sends diagnostics to `sink`, filtered by the
    /// configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the HTTP transport cannot be built.
    pub fn with_sink(
        config: PipefyConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self, ConfigError> {
        let diagnostics = Diagnostics::new(config.log_level(), sink);
        Self::with_diagnostics(config, diagnostics)
    }

    /// Creates a client for the default endpoint from a personal access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if `token` is empty or blank.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pipefy_api::PipefyClient;
    ///
    /// let client = PipefyClient::from_access_token("abc123").unwrap();
    /// assert_eq!(client.authorization_header(), "Bearer abc123");
    ///
    /// assert!(PipefyClient::from_access_token("  ").is_err());
    /// ```
    pub fn from_access_token(token: impl Into<String>) -> Result<Self, ConfigError> {
        let config = PipefyConfig::builder()
            .access_token(AccessToken::new(token)?)
            .build()?;
        Self::new(config)
    }

    fn with_diagnostics(
        config: PipefyConfig,
        diagnostics: Diagnostics,
    ) -> Result<Self, ConfigError> {
        let graphql = GraphqlClient::new(&config, diagnostics)?;
        Ok(Self {
            authorization: config.access_token().bearer_header(),
            config,
            graphql,
        })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &PipefyConfig {
        &self.config
    }

    /// Returns the endpoint every request is posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.graphql.endpoint()
    }

    /// Returns the `Authorization` header value sent with every request.
    #[must_use]
    pub fn authorization_header(&self) -> &str {
        &self.authorization
    }

    /// Returns the diagnostic level.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        self.config.log_level()
    }

    /// Runs any catalog operation by name and returns the raw `data` object.
    ///
    /// `variables` is validated against the operation's declared parameters
    /// exactly as the typed methods do.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownOperation`] if no operation has this name
    /// - any other [`PipefyError`] the typed methods can return
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pipefy_api::PipefyClient;
    /// use serde_json::{json, Map};
    ///
    /// # async fn run(client: PipefyClient) -> Result<(), pipefy_api::PipefyError> {
    /// let mut variables = Map::new();
    /// variables.insert("id".to_string(), json!("301"));
    ///
    /// let data = client.execute("showPipe", variables).await?;
    /// println!("{}", data["pipe"]["name"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute(
        &self,
        operation: &str,
        variables: Map<String, Value>,
    ) -> Result<Value, PipefyError> {
        let spec = operations::find(operation).ok_or_else(|| ValidationError::UnknownOperation {
            name: operation.to_string(),
        })?;
        let response = self.send(spec, &variables).await?;
        Ok(response.data.unwrap_or(Value::Null))
    }

    /// Validates and sends one operation.
    async fn send(
        &self,
        spec: &'static OperationSpec,
        variables: &Map<String, Value>,
    ) -> Result<GraphqlResponse, PipefyError> {
        let diagnostics = self.graphql.diagnostics();
        if let Err(e) = spec.validate(variables) {
            diagnostics.emit(LogLevel::Warn, Some(spec.name), || {
                format!("Rejected before sending: {e}")
            });
            return Err(e.into());
        }

        diagnostics.emit(LogLevel::Info, Some(spec.name), || {
            format!("Sending {} {}", spec.kind, spec.name)
        });
        Ok(self.graphql.query(spec.name, spec.document, variables).await?)
    }

    /// Sends an operation and decodes its root field.
    async fn fetch<T: DeserializeOwned>(
        &self,
        spec: &'static OperationSpec,
        variables: Map<String, Value>,
    ) -> Result<T, PipefyError> {
        let response = self.send(spec, &variables).await?;
        decode_root(spec, response)
    }

    /// Sends an operation whose variables come from a typed input.
    async fn run<I: Serialize + Sync, T: DeserializeOwned>(
        &self,
        spec: &'static OperationSpec,
        input: &I,
    ) -> Result<T, PipefyError> {
        let variables = to_variables(spec, input)?;
        self.fetch(spec, variables).await
    }

    /// Sends a list query and drops `null` entries (ids the caller cannot see).
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        spec: &'static OperationSpec,
        variables: Map<String, Value>,
    ) -> Result<Vec<T>, PipefyError> {
        let items: Option<Vec<Option<T>>> = self.fetch(spec, variables).await?;
        Ok(items.unwrap_or_default().into_iter().flatten().collect())
    }

    /// Runs a delete-by-id mutation.
    ///
    /// A record that does not exist is reported as
    /// [`DeleteOutcome::AlreadyAbsent`], whether the API says so with
    /// `success: false` or with not-found errors. A null payload without
    /// errors is an [`PipefyError::UnexpectedPayload`].
    async fn delete(
        &self,
        spec: &'static OperationSpec,
        id: &Id,
    ) -> Result<DeleteOutcome, PipefyError> {
        let variables = Variables::new().with("id", id).into_map();
        match self.fetch::<DeletePayload>(spec, variables).await {
            Ok(payload) => Ok(DeleteOutcome::from(payload)),
            Err(PipefyError::Operation(e)) if e.is_not_found() => {
                self.graphql
                    .diagnostics()
                    .emit(LogLevel::Info, Some(spec.name), || {
                        format!("Record {id} already absent: {}", e.messages().join("; "))
                    });
                Ok(DeleteOutcome::AlreadyAbsent)
            }
            Err(e) => Err(e),
        }
    }
}

/// Decodes `data[root_field]`, treating a missing field as `null`.
fn decode_root<T: DeserializeOwned>(
    spec: &'static OperationSpec,
    response: GraphqlResponse,
) -> Result<T, PipefyError> {
    let payload = response
        .data
        .and_then(|mut data| data.get_mut(spec.root_field).map(Value::take))
        .unwrap_or(Value::Null);
    serde_json::from_value(payload).map_err(|source| PipefyError::UnexpectedPayload {
        operation: spec.name,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EndpointUrl;
    use crate::diagnostics::DiagnosticEvent;
    use crate::operations::{DELETE_PIPE, GET_ME};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<(LogLevel, String)>>);

    impl DiagnosticSink for Recording {
        fn record(&self, event: &DiagnosticEvent<'_>) {
            self.0
                .lock()
                .unwrap()
                .push((event.level, event.message.to_string()));
        }
    }

    fn config(level: LogLevel) -> PipefyConfig {
        PipefyConfig::builder()
            .access_token(AccessToken::new("secret-token").unwrap())
            .endpoint(EndpointUrl::new("http://127.0.0.1:9/queries").unwrap())
            .log_level(level)
            .build()
            .unwrap()
    }

    #[test]
    fn test_authorization_header_is_bearer_token() {
        let client = PipefyClient::new(config(LogLevel::Silent)).unwrap();
        assert_eq!(client.authorization_header(), "Bearer secret-token");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/queries");
    }

    #[test]
    fn test_debug_output_masks_token() {
        let client = PipefyClient::new(config(LogLevel::Silent)).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-token\""));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_from_access_token_rejects_blank() {
        assert_eq!(
            PipefyClient::from_access_token("").unwrap_err(),
            ConfigError::EmptyAccessToken
        );
    }

    #[test]
    fn test_decode_root_reads_named_field() {
        let response = GraphqlResponse {
            data: Some(json!({"deletePipe": {"success": true}})),
            errors: None,
            extensions: None,
        };
        let payload: DeletePayload = decode_root(&DELETE_PIPE, response).unwrap();
        assert_eq!(DeleteOutcome::from(payload), DeleteOutcome::Deleted);
    }

    #[test]
    fn test_decode_root_reports_shape_mismatch() {
        let response = GraphqlResponse {
            data: Some(json!({"me": {"id": {"nested": true}}})),
            errors: None,
            extensions: None,
        };
        let result: Result<crate::models::User, _> = decode_root(&GET_ME, response);
        assert!(matches!(
            result,
            Err(PipefyError::UnexpectedPayload {
                operation: "getMe",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_unknown_operation_is_a_validation_error() {
        let client = PipefyClient::new(config(LogLevel::Silent)).unwrap();
        let error = client.execute("dropEverything", Map::new()).await.unwrap_err();
        assert!(matches!(
            error,
            PipefyError::Validation(ValidationError::UnknownOperation { ref name }) if name == "dropEverything"
        ));
    }

    #[tokio::test]
    async fn test_rejected_call_is_reported_to_sink() {
        let sink = Arc::new(Recording::default());
        let client = PipefyClient::with_sink(config(LogLevel::Warn), sink.clone()).unwrap();

        let error = client.delete_pipe(&Id::default()).await.unwrap_err();
        assert!(error.is_validation());

        let events = sink.0.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, LogLevel::Warn);
        assert!(events[0].1.contains("requires parameter 'id'"));
    }

    #[test]
    fn test_validation_failures_never_touch_the_network() {
        // The endpoint points at a closed port; a network attempt would
        // surface as a transport error instead.
        let client = PipefyClient::new(config(LogLevel::Silent)).unwrap();
        let result = tokio_test::block_on(client.get_card_by_id(&Id::from("   ")));
        assert!(result.unwrap_err().is_validation());
    }
}
