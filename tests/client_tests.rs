//! Integration tests for client construction and the query operations.
//!
//! Every test runs against a local `wiremock` server standing in for the
//! Pipefy endpoint.

use pipefy_api::{AccessToken, ConfigError, EndpointUrl, Id, LogLevel, PipefyClient, PipefyConfig};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-access-token";

/// Starts a mock server and a client pointed at it.
async fn setup() -> (MockServer, PipefyClient) {
    let server = MockServer::start().await;
    let config = PipefyConfig::builder()
        .access_token(AccessToken::new(TOKEN).unwrap())
        .endpoint(EndpointUrl::new(format!("{}/queries", server.uri())).unwrap())
        .build()
        .unwrap();
    let client = PipefyClient::new(config).unwrap();
    (server, client)
}

fn data(payload: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": payload }))
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_authorization_header_is_exactly_bearer_plus_token() {
    for token in ["abc", "a.b.c-123", "eyJhbGciOiJIUzUxMiJ9.payload.signature"] {
        let client = PipefyClient::from_access_token(token).unwrap();
        assert_eq!(client.authorization_header(), format!("Bearer {token}"));
    }
}

#[test]
fn test_default_endpoint() {
    let client = PipefyClient::from_access_token("abc").unwrap();
    assert_eq!(client.endpoint(), "https://app.pipefy.com/queries");
    assert_eq!(client.log_level(), LogLevel::Silent);
}

#[test]
fn test_empty_token_is_a_config_error() {
    assert_eq!(
        PipefyClient::from_access_token("").unwrap_err(),
        ConfigError::EmptyAccessToken
    );
}

#[test]
fn test_builder_without_token_is_a_config_error() {
    assert_eq!(
        PipefyConfig::builder().build().unwrap_err(),
        ConfigError::MissingRequiredField {
            field: "access_token"
        }
    );
}

#[test]
fn test_log_level_parses_case_insensitively() {
    assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
    assert!(matches!(
        "loud".parse::<LogLevel>(),
        Err(ConfigError::InvalidLogLevel { .. })
    ));
}

#[test]
fn test_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PipefyClient>();
}

// ============================================================================
// Wire format
// ============================================================================

#[tokio::test]
async fn test_request_carries_headers_and_envelope() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/queries"))
        .and(header("Authorization", "Bearer test-access-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_string_contains("query getMe"))
        .and(body_partial_json(json!({ "variables": {} })))
        .respond_with(data(json!({"me": {"id": "1", "name": "Ana"}})))
        .expect(1)
        .mount(&server)
        .await;

    let me = client.get_me().await.unwrap();
    assert_eq!(me.name.as_deref(), Some("Ana"));
}

#[tokio::test]
async fn test_values_travel_as_variables_not_document_text() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(data(json!({"card": {"id": "7", "title": "x"}})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .get_card_by_id(&Id::from("7\") { id } } mutation { deletePipe"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let query = body["query"].as_str().unwrap();
    assert!(!query.contains("deletePipe"));
    assert_eq!(
        body["variables"]["id"],
        json!("7\") { id } } mutation { deletePipe")
    );
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_get_me_reads_both_field_spellings() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(data(json!({
            "me": {
                "id": 1,
                "email": "ana@example.com",
                "avatar_url": "https://img/ana.png",
                "timeZone": "America/Sao_Paulo",
                "created_at": "2019-01-01T10:00:00-02:00"
            }
        })))
        .mount(&server)
        .await;

    let me = client.get_me().await.unwrap();
    assert_eq!(me.id, Some(Id::from("1")));
    assert_eq!(me.avatar_url.as_deref(), Some("https://img/ana.png"));
    assert_eq!(me.time_zone.as_deref(), Some("America/Sao_Paulo"));
    assert_eq!(
        me.created_at.unwrap().to_rfc3339(),
        "2019-01-01T12:00:00+00:00"
    );
}

#[tokio::test]
async fn test_list_organizations_without_ids_sends_no_variables() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(body_string_contains("listOrganizations"))
        .and(body_partial_json(json!({ "variables": {} })))
        .respond_with(data(json!({
            "organizations": [
                {"id": "1", "name": "Acme", "pipes": [{"id": "301", "name": "Hiring"}]},
                {"id": "2", "name": "Globex"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let organizations = client.list_organizations(None).await.unwrap();
    assert_eq!(organizations.len(), 2);
    assert_eq!(organizations[0].pipes[0].name.as_deref(), Some("Hiring"));

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["variables"], json!({}));
}

#[tokio::test]
async fn test_get_organization_by_id() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(body_string_contains("query showOrganization"))
        .and(body_partial_json(json!({ "variables": {"id": "42"} })))
        .respond_with(data(json!({
            "organization": {
                "id": "42",
                "name": "Acme",
                "members": [{"user": {"id": "1", "name": "Ana"}, "role_name": "admin"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let organization = client
        .get_organization_by_id(&Id::from(42_u64))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(organization.members[0].role_name.as_deref(), Some("admin"));
}

#[tokio::test]
async fn test_list_pipes_skips_null_entries_and_passes_cards_first() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"ids": ["301", "999"], "cardsFirst": 5}
        })))
        .respond_with(data(json!({
            "pipes": [{"id": "301", "name": "Hiring", "phases": []}, null]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pipes = client
        .list_pipes(&[Id::from("301"), Id::from(999_u64)], Some(5))
        .await
        .unwrap();
    assert_eq!(pipes.len(), 1);
    assert_eq!(pipes[0].name.as_deref(), Some("Hiring"));
}

#[tokio::test]
async fn test_get_pipe_by_id_returns_none_for_null() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(body_string_contains("query showPipe"))
        .respond_with(data(json!({"pipe": null})))
        .mount(&server)
        .await;

    let pipe = client.get_pipe_by_id(&Id::from("301"), None).await.unwrap();
    assert!(pipe.is_none());
}

#[tokio::test]
async fn test_get_phase_by_id() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"id": "10", "cardsFirst": 2}
        })))
        .respond_with(data(json!({
            "phase": {
                "id": "10",
                "name": "Inbox",
                "cards_count": 12,
                "cards": {"edges": [{"node": {"id": "7", "title": "Ana"}}]},
                "cards_can_be_moved_to_phases": [{"id": "11", "name": "Doing"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let phase = client
        .get_phase_by_id(&Id::from("10"), Some(2))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(phase.cards_count, Some(12));
    assert_eq!(phase.cards.unwrap().into_nodes()[0].title.as_deref(), Some("Ana"));
    assert_eq!(phase.cards_can_be_moved_to_phases[0].id, Some(Id::from("11")));
}

#[tokio::test]
async fn test_get_cards_by_pipe_id_pages_without_auto_pagination() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"pipe_id": "301", "first": 2}
        })))
        .respond_with(data(json!({
            "cards": {
                "pageInfo": {"hasNextPage": true, "endCursor": "cursor-2"},
                "edges": [
                    {"cursor": "cursor-1", "node": {"id": "1", "title": "One"}},
                    {"cursor": "cursor-2", "node": {"id": "2", "title": "Two"}}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .get_cards_by_pipe_id(&Id::from("301"), Some(2), None)
        .await
        .unwrap();
    let titles: Vec<_> = page.nodes().filter_map(|c| c.title.as_deref()).collect();
    assert_eq!(titles, ["One", "Two"]);
    assert_eq!(page.next_cursor(), Some("cursor-2"));
}

#[tokio::test]
async fn test_get_cards_by_pipe_id_passes_after_cursor() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"pipe_id": "301", "after": "cursor-2"}
        })))
        .respond_with(data(json!({
            "cards": {
                "pageInfo": {"hasNextPage": false, "endCursor": "cursor-3"},
                "edges": [{"node": {"id": "3", "title": "Three"}}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .get_cards_by_pipe_id(&Id::from("301"), None, Some("cursor-2"))
        .await
        .unwrap();
    assert_eq!(page.edges.len(), 1);
    assert_eq!(page.next_cursor(), None);
}

#[tokio::test]
async fn test_get_card_by_id_selects_superset_fields() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(body_string_contains("current_phase"))
        .and(body_string_contains("child_relations"))
        .respond_with(data(json!({
            "card": {
                "id": "7",
                "title": "Ana",
                "current_phase": {"id": "10", "name": "Inbox"},
                "pipe": {"id": "301", "name": "Hiring"},
                "fields": [{"name": "Email", "value": "ana@example.com", "phase_field": {"id": "email"}}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let card = client.get_card_by_id(&Id::from("7")).await.unwrap().unwrap();
    assert_eq!(card.pipe.unwrap().name.as_deref(), Some("Hiring"));
    assert_eq!(
        card.fields[0].value,
        Some(json!("ana@example.com"))
    );
}

#[tokio::test]
async fn test_get_pipe_relation_by_ids() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": {"ids": ["3"]} })))
        .respond_with(data(json!({
            "pipe_relations": [{
                "id": "3",
                "name": "Tasks",
                "parent_id": 301,
                "child_id": "302",
                "can_connect_multiple_cards": true
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let relations = client
        .get_pipe_relation_by_ids(&[Id::from("3")])
        .await
        .unwrap();
    assert_eq!(relations[0].parent_id, Some(Id::from("301")));
    assert_eq!(relations[0].can_connect_multiple_cards, Some(true));
}

#[tokio::test]
async fn test_execute_returns_raw_data() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(body_string_contains("query showPipe"))
        .respond_with(data(json!({"pipe": {"id": "301", "name": "Hiring"}})))
        .expect(1)
        .mount(&server)
        .await;

    let mut variables = serde_json::Map::new();
    variables.insert("id".to_string(), json!(301));
    let result = client.execute("showPipe", variables).await.unwrap();
    assert_eq!(result["pipe"]["name"], "Hiring");
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(data(json!({"me": {"id": "1", "name": "Ana"}})))
        .expect(2)
        .mount(&server)
        .await;

    let (first, second) = tokio::join!(client.get_me(), client.get_me());
    assert_eq!(first.unwrap(), second.unwrap());
}
