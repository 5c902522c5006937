//! Integration tests for error classification and diagnostics.

use std::sync::{Arc, Mutex};

use pipefy_api::diagnostics::{DiagnosticEvent, DiagnosticSink};
use pipefy_api::operations::inputs::CreateCardInput;
use pipefy_api::{
    AccessToken, DeleteOutcome, EndpointUrl, HttpError, Id, LogLevel, PipefyClient, PipefyConfig,
    PipefyError, ValidationError,
};
use serde_json::{json, Map};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(endpoint: &str, level: LogLevel) -> PipefyConfig {
    PipefyConfig::builder()
        .access_token(AccessToken::new("test-access-token").unwrap())
        .endpoint(EndpointUrl::new(endpoint).unwrap())
        .log_level(level)
        .build()
        .unwrap()
}

/// Starts a mock server and a client pointed at it.
async fn setup() -> (MockServer, PipefyClient) {
    let server = MockServer::start().await;
    let endpoint = format!("{}/queries", server.uri());
    let client = PipefyClient::new(config_for(&endpoint, LogLevel::Silent)).unwrap();
    (server, client)
}

#[derive(Default)]
struct Recording(Mutex<Vec<(LogLevel, Option<String>, String)>>);

impl DiagnosticSink for Recording {
    fn record(&self, event: &DiagnosticEvent<'_>) {
        self.0.lock().unwrap().push((
            event.level,
            event.operation.map(String::from),
            event.message.to_string(),
        ));
    }
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_blank_required_id_is_rejected_without_a_request() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = client.get_card_by_id(&Id::from("")).await.unwrap_err();

    match error {
        PipefyError::Validation(ValidationError::MissingParameter { operation, param }) => {
            assert_eq!(operation, "getCardById");
            assert_eq!(param, "id");
        }
        other => panic!("Expected missing parameter, got {other:?}"),
    }
}

#[tokio::test]
async fn test_default_input_reports_first_missing_parameter() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = client
        .create_card(&CreateCardInput::default())
        .await
        .unwrap_err();

    assert!(error.is_validation());
    assert_eq!(
        error.to_string(),
        "Operation 'createCard' requires parameter 'pipe_id'."
    );
}

#[tokio::test]
async fn test_execute_rejects_wrongly_shaped_values() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut variables = Map::new();
    variables.insert("id".to_string(), json!("12"));
    variables.insert("done".to_string(), json!("yes"));
    variables.insert("name".to_string(), json!("Done"));

    let error = client.execute("updatePhase", variables).await.unwrap_err();
    assert!(matches!(
        error,
        PipefyError::Validation(ValidationError::InvalidParameter { param: "done", .. })
    ));
}

#[tokio::test]
async fn test_execute_rejects_undeclared_parameters() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut variables = Map::new();
    variables.insert("id".to_string(), json!("7"));
    variables.insert("pipeId".to_string(), json!("301"));

    let error = client.execute("getCardById", variables).await.unwrap_err();
    assert!(matches!(
        error,
        PipefyError::Validation(ValidationError::UnknownParameter { .. })
    ));
}

#[tokio::test]
async fn test_execute_rejects_unknown_operations() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = client.execute("dropDatabase", Map::new()).await.unwrap_err();
    assert_eq!(
        error.to_string(),
        ValidationError::UnknownOperation {
            name: "dropDatabase".to_string()
        }
        .to_string()
    );
}

#[tokio::test]
async fn test_page_size_beyond_32_bits_is_rejected_without_a_request() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = client
        .get_cards_by_pipe_id(&Id::from("301"), Some(3_000_000_000), None)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        PipefyError::Validation(ValidationError::InvalidParameter { param: "first", .. })
    ));
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_non_json_success_body_is_a_transport_error() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = client.get_me().await.unwrap_err();
    assert!(matches!(
        error,
        PipefyError::Transport(HttpError::InvalidBody(_))
    ));
}

#[tokio::test]
async fn test_unauthorized_status_is_a_transport_error_with_reference() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .insert_header("X-Request-Id", "req-401")
                .set_body_json(json!({"error": "Unauthorized"})),
        )
        .mount(&server)
        .await;

    let error = client.get_me().await.unwrap_err();
    match error {
        PipefyError::Transport(HttpError::Response(e)) => {
            assert_eq!(e.code, 401);
            assert!(e.message.contains("Unauthorized"));
            assert_eq!(e.error_reference.as_deref(), Some("req-401"));
        }
        other => panic!("Expected HTTP response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_network_error() {
    let client =
        PipefyClient::new(config_for("http://127.0.0.1:1/queries", LogLevel::Silent)).unwrap();

    let error = client.get_me().await.unwrap_err();
    assert!(error.is_transport());
    assert!(matches!(error, PipefyError::Transport(HttpError::Network(_))));
}

// ============================================================================
// Operation errors and payload decoding
// ============================================================================

#[tokio::test]
async fn test_errors_envelope_on_server_error_is_an_operation_error() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": [{"message": "Something went wrong"}]
        })))
        .mount(&server)
        .await;

    let error = client.get_pipe_by_id(&Id::from("301"), None).await.unwrap_err();
    match error {
        PipefyError::Operation(e) => {
            assert_eq!(e.operation, "showPipe");
            assert_eq!(e.messages(), vec!["Something went wrong"]);
        }
        other => panic!("Expected operation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_partial_data_is_kept_on_operation_errors() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"card": null},
            "errors": [{"message": "Permission denied", "extensions": {"code": "PERMISSION_DENIED"}}]
        })))
        .mount(&server)
        .await;

    let error = client.get_card_by_id(&Id::from("7")).await.unwrap_err();
    match error {
        PipefyError::Operation(e) => {
            assert_eq!(e.data, Some(json!({"card": null})));
            assert!(!e.is_not_found());
        }
        other => panic!("Expected operation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_errors_with_partial_locations_are_operation_errors() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Field 'x' doesn't exist", "locations": [{"line": 2}]}]
        })))
        .mount(&server)
        .await;

    let error = client.get_me().await.unwrap_err();
    match error {
        PipefyError::Operation(e) => {
            assert_eq!(e.messages(), vec!["Field 'x' doesn't exist"]);
        }
        other => panic!("Expected operation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_not_found_entries_keep_deletes_idempotent() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Card not found", "path": "card", "extensions": {"code": "NOT_FOUND"}}]
        })))
        .mount(&server)
        .await;

    let outcome = client.delete_card(&Id::from("7")).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::AlreadyAbsent);
}

#[tokio::test]
async fn test_null_me_is_an_unexpected_payload() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"me": null}})))
        .mount(&server)
        .await;

    let error = client.get_me().await.unwrap_err();
    assert!(matches!(
        error,
        PipefyError::UnexpectedPayload {
            operation: "getMe",
            ..
        }
    ));
}

#[tokio::test]
async fn test_mistyped_payload_is_an_unexpected_payload() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"pipe": {"id": "301", "phases": "not a list"}}
        })))
        .mount(&server)
        .await;

    let error = client.get_pipe_by_id(&Id::from("301"), None).await.unwrap_err();
    assert!(error.to_string().contains("showPipe"));
}

// ============================================================================
// Diagnostics
// ============================================================================

#[tokio::test]
async fn test_custom_sink_receives_filtered_events() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"me": {"id": "1", "name": "Ana"}}
        })))
        .mount(&server)
        .await;

    let sink = Arc::new(Recording::default());
    let endpoint = format!("{}/queries", server.uri());
    let client =
        PipefyClient::with_sink(config_for(&endpoint, LogLevel::Info), sink.clone()).unwrap();

    client.get_me().await.unwrap();

    let events = sink.0.lock().unwrap();
    assert!(!events.is_empty());
    assert!(events
        .iter()
        .all(|(level, _, _)| *level <= LogLevel::Info && *level != LogLevel::Silent));
    assert!(events
        .iter()
        .any(|(_, operation, message)| operation.as_deref() == Some("getMe")
            && message.contains("Sending query getMe")));
    assert!(!events
        .iter()
        .any(|(_, _, message)| message.contains("test-access-token")));
}

#[tokio::test]
async fn test_silent_client_emits_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let sink = Arc::new(Recording::default());
    let endpoint = format!("{}/queries", server.uri());
    let client =
        PipefyClient::with_sink(config_for(&endpoint, LogLevel::Silent), sink.clone()).unwrap();

    assert!(client.get_me().await.is_err());
    assert!(sink.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_calls_are_logged_as_warnings() {
    let server = MockServer::start().await;
    let sink = Arc::new(Recording::default());
    let endpoint = format!("{}/queries", server.uri());
    let client =
        PipefyClient::with_sink(config_for(&endpoint, LogLevel::Warn), sink.clone()).unwrap();

    assert!(client.delete_card(&Id::from(" ")).await.is_err());

    let events = sink.0.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, LogLevel::Warn);
    assert!(events[0].2.starts_with("Rejected before sending"));
}
