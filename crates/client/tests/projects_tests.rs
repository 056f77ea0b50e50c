//! Project definition endpoint tests.

mod common;

use common::*;
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_get_projects() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("projects/get_projects.json");

    Mock::given(method("POST"))
        .and(path("/api/1/get_projects"))
        .and(body_json(serde_json::json!({"index": "zuul"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let resp = endpoints::get_projects(&client, &mock_server.uri(), None, "zuul")
        .await
        .unwrap();

    assert_eq!(resp.projects.len(), 3);
    assert_eq!(resp.projects[0].name, "zuul");
    assert_eq!(resp.projects[0].repository_regex.as_deref(), Some("zuul/.*"));
    assert_eq!(resp.projects[0].branch_regex, None);
    assert_eq!(resp.projects[1].branch_regex.as_deref(), Some("master"));
    assert_eq!(resp.projects[2].file_regex.as_deref(), Some(".*\\.rst"));
}
