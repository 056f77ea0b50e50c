//! User group endpoints.

use reqwest::Client;

use crate::endpoints::request::{parse_json, post_json};
use crate::error::Result;
use crate::models::{UserGroupListRequest, UserGroupListResponse};

/// List the user groups defined for an index.
pub async fn list_user_groups(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    index: &str,
) -> Result<UserGroupListResponse> {
    let response = post_json(
        client,
        base_url,
        auth_token,
        "/api/2/user_group/list",
        &UserGroupListRequest { index },
    )
    .await?;

    parse_json(response).await
}
