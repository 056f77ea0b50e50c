//! Request helpers shared by all endpoints.
//!
//! Responsibilities:
//! - Send a JSON `POST` with optional bearer authentication.
//! - Map non-success statuses to `ClientError::ApiError`.
//! - Decode response bodies, reporting malformed JSON as `InvalidResponse`.
//!
//! Does NOT handle:
//! - Retries. A failed call is reported once and left to the caller.

use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Maximum number of body characters kept in an API error message.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Send a JSON `POST` to `base_url` + `path` and return the successful response.
///
/// # Errors
///
/// Returns `ClientError::HttpError` on transport failure and
/// `ClientError::ApiError` when the backend answers with a non-2xx status.
pub async fn post_json<B: Serialize + ?Sized>(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    path: &str,
    body: &B,
) -> Result<Response> {
    let url = format!("{}{}", base_url, path);

    let mut builder = client.post(&url).json(body);
    if let Some(token) = auth_token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    debug!(endpoint = path, "Sending request");
    let response = builder.send().await?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();

    debug!(endpoint = path, status = status.as_u16(), "Request failed");
    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Decode a JSON response body.
///
/// The body is read fully before decoding so a malformed payload is reported
/// as `ClientError::InvalidResponse` rather than a transport error.
pub async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
