//! Catalog-wide integration tests: every operation validates locally and
//! sends its own document with only declared variables.

use pipefy_api::operations::{self, OperationKind, ParamShape, CATALOG};
use pipefy_api::{AccessToken, EndpointUrl, PipefyClient, PipefyConfig, PipefyError, ValidationError};
use serde_json::{json, Map, Value};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts a mock server and a client pointed at it.
async fn setup() -> (MockServer, PipefyClient) {
    let server = MockServer::start().await;
    let config = PipefyConfig::builder()
        .access_token(AccessToken::new("test-access-token").unwrap())
        .endpoint(EndpointUrl::new(format!("{}/queries", server.uri())).unwrap())
        .build()
        .unwrap();
    (server, PipefyClient::new(config).unwrap())
}

fn sample(shape: ParamShape) -> Value {
    match shape {
        ParamShape::Id => json!("1"),
        ParamShape::IdList => json!(["1", 2]),
        ParamShape::String => json!("text"),
        ParamShape::StringList => json!(["a", "b"]),
        ParamShape::Int => json!(10),
        ParamShape::Float => json!(1.5),
        ParamShape::Boolean => json!(true),
        ParamShape::DateTime => json!("2024-01-01T00:00:00Z"),
        ParamShape::Object => json!({"key": "value"}),
        ParamShape::ObjectList => json!([{"key": "value"}]),
        ParamShape::Json => json!(["value"]),
    }
}

#[test]
fn test_catalog_lookup_matches_entries() {
    for spec in CATALOG {
        let found = operations::find(spec.name).unwrap();
        assert_eq!(found.name, spec.name);
        assert_eq!(found.document, spec.document);
    }
    assert!(operations::find("GetMe").is_none());
}

#[test]
fn test_mutation_root_fields_match_operation_names() {
    for spec in CATALOG.iter().filter(|s| s.kind == OperationKind::Mutation) {
        assert_eq!(spec.root_field, spec.name, "{}", spec.name);
        assert!(spec.document.starts_with("mutation "), "{}", spec.name);
    }
}

#[tokio::test]
async fn test_every_operation_rejects_missing_required_parameters() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for spec in CATALOG {
        let Some(first_required) = spec.required_params().next() else {
            continue;
        };

        let error = client.execute(spec.name, Map::new()).await.unwrap_err();
        match error {
            PipefyError::Validation(ValidationError::MissingParameter { operation, param }) => {
                assert_eq!(operation, spec.name);
                assert_eq!(param, first_required);
            }
            other => panic!("{}: expected missing parameter, got {other:?}", spec.name),
        }
    }
}

#[tokio::test]
async fn test_every_operation_sends_its_document_and_variables() {
    for spec in CATALOG {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": { spec.root_field: null } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let variables: Map<String, Value> = spec
            .params
            .iter()
            .map(|param| (param.name.to_string(), sample(param.shape)))
            .collect();

        let data = client
            .execute(spec.name, variables.clone())
            .await
            .unwrap_or_else(|e| panic!("{}: {e}", spec.name));
        assert_eq!(data, json!({ spec.root_field: null }), "{}", spec.name);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1, "{}", spec.name);
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["query"], spec.document, "{}", spec.name);
        assert_eq!(body["variables"], Value::Object(variables), "{}", spec.name);
    }
}
