//! Search endpoint tests.
//!
//! This module tests the suggestions and fields endpoints:
//! - Request body shape (`index` / `version`)
//! - Decoding of fixture payloads, including omitted default lists
//! - Bearer token forwarding through `MonocleClient`

mod common;

use common::*;
use monocle_client::{FieldType, MonocleClient};
use secrecy::SecretString;
use wiremock::matchers::{body_json, header, method, path};

#[tokio::test]
async fn test_get_suggestions() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("search/suggestions.json");

    Mock::given(method("POST"))
        .and(path("/api/2/search/suggestions"))
        .and(body_json(serde_json::json!({"index": "openstack"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result =
        endpoints::get_suggestions(&client, &mock_server.uri(), None, "openstack").await;

    let suggestions = result.unwrap();
    assert_eq!(suggestions.authors, vec!["alice", "bob", "carol"]);
    assert_eq!(suggestions.task_types, vec!["bug", "feature"]);
    // `labels` is absent from the fixture
    assert!(suggestions.labels.is_empty());
}

#[tokio::test]
async fn test_get_fields() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("search/fields.json");

    Mock::given(method("POST"))
        .and(path("/api/2/search/fields"))
        .and(body_json(serde_json::json!({"version": "1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = MonocleClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let fields = client.get_fields().await.unwrap();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0].name, "from");
    assert_eq!(fields[0].field_type, FieldType::Date);
    assert_eq!(fields[1].field_type, FieldType::Regex);
    assert_eq!(fields[3].field_type, FieldType::Number);
}

#[tokio::test]
async fn test_client_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2/search/suggestions"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = MonocleClient::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .api_token(SecretString::new("secret-token".to_string().into()))
        .build()
        .unwrap();

    let suggestions = client.get_suggestions("openstack").await.unwrap();
    assert_eq!(suggestions, Default::default());
}
