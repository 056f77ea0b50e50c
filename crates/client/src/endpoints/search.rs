//! Search endpoints: query suggestions and field metadata.

use reqwest::Client;

use crate::endpoints::request::{parse_json, post_json};
use crate::error::Result;
use crate::models::{
    Field, FieldsRequest, FieldsResponse, SuggestionsRequest, SuggestionsResponse,
};

/// Fetch query suggestions for an index.
pub async fn get_suggestions(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    index: &str,
) -> Result<SuggestionsResponse> {
    let response = post_json(
        client,
        base_url,
        auth_token,
        "/api/2/search/suggestions",
        &SuggestionsRequest { index },
    )
    .await?;

    parse_json(response).await
}

/// Fetch the searchable fields for a query language version.
pub async fn get_fields(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    version: &str,
) -> Result<Vec<Field>> {
    let response = post_json(
        client,
        base_url,
        auth_token,
        "/api/2/search/fields",
        &FieldsRequest { version },
    )
    .await?;

    let resp: FieldsResponse = parse_json(response).await?;
    Ok(resp.fields)
}
