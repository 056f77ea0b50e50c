//! Configuration types for the Monocle dashboard.
//!
//! Responsibilities:
//! - Define connection settings (URL, timeout).
//! - Define the main `Config` structure combining connection and token.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` is an absolute http(s) URL without a trailing slash once
//!   produced by the loader.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Connection configuration for the Monocle API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the API (e.g., http://localhost:8080)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub connection: ConnectionConfig,
    /// Bearer token, when the backend requires one.
    pub api_token: Option<SecretString>,
}

impl Config {
    /// Create a config for an unauthenticated backend.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            api_token: None,
        }
    }

    /// Create a config that authenticates with a bearer token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            api_token: Some(token),
            ..Self::with_base_url(base_url)
        }
    }
}
