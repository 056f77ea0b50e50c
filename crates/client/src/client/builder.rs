//! Builder for [`MonocleClient`].
//!
//! Responsibilities:
//! - Collect connection options (base URL, token, timeout).
//! - Apply a loaded `monocle_config::Config`.
//! - Build the underlying `reqwest::Client`.
//!
//! Invariants:
//! - The stored base URL never ends with `/`, so endpoint paths can be
//!   appended directly.

use secrecy::SecretString;
use std::time::Duration;

use monocle_config::Config;
use monocle_config::constants::DEFAULT_TIMEOUT_SECS;

use crate::client::MonocleClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`MonocleClient`].
pub struct MonocleClientBuilder {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    timeout: Duration,
}

impl Default for MonocleClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl MonocleClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Monocle API.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the bearer token sent with every request.
    pub fn api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Apply every option from a loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.api_token = config.api_token.clone();
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"http://localhost:8080/"` -> `"http://localhost:8080"`
    /// - `"http://localhost:8080//"` -> `"http://localhost:8080"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`MonocleClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<MonocleClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(MonocleClient {
            http,
            base_url,
            api_token: self.api_token,
        })
    }
}
