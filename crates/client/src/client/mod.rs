//! Main Monocle API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `search`: Suggestions and field metadata
//! - `user_groups`: User group listing
//! - `projects`: Project definitions
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])

pub mod builder;

mod projects;
mod search;
mod user_groups;

use secrecy::{ExposeSecret, SecretString};

use builder::MonocleClientBuilder;

/// Monocle web API client.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted,
/// so a clone can be moved into each spawned fetch.
///
/// ```rust,ignore
/// use monocle_client::MonocleClient;
///
/// let client = MonocleClient::builder()
///     .base_url("http://localhost:8080".to_string())
///     .build()?;
/// let groups = client.list_user_groups("openstack").await?;
/// ```
#[derive(Debug, Clone)]
pub struct MonocleClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: Option<SecretString>,
}

impl MonocleClient {
    /// Create a new client builder.
    pub fn builder() -> MonocleClientBuilder {
        MonocleClientBuilder::new()
    }

    /// The normalized base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry a bearer token.
    pub fn has_api_token(&self) -> bool {
        self.api_token.is_some()
    }

    pub(crate) fn auth_token(&self) -> Option<&str> {
        self.api_token.as_ref().map(|t| t.expose_secret())
    }
}
