//! Project configuration endpoints.

use reqwest::Client;

use crate::endpoints::request::{parse_json, post_json};
use crate::error::Result;
use crate::models::{ProjectsRequest, ProjectsResponse};

/// Fetch the project definitions configured for an index.
pub async fn get_projects(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    index: &str,
) -> Result<ProjectsResponse> {
    let response = post_json(
        client,
        base_url,
        auth_token,
        "/api/1/get_projects",
        &ProjectsRequest { index },
    )
    .await?;

    parse_json(response).await
}
