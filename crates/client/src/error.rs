//! Error types for the Monocle client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Message shown for every transport-level failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Errors that can occur during Monocle client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the backend.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Human-readable description suitable for display in the dashboard.
    ///
    /// Transport failures collapse to [`NETWORK_ERROR_MESSAGE`] so raw
    /// transport details never reach application state.
    pub fn user_message(&self) -> String {
        match self {
            Self::HttpError(e) if e.is_decode() => {
                format!("Invalid response: {e}")
            }
            Self::HttpError(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::ApiError {
                status, message, ..
            } => {
                if message.is_empty() {
                    format!("HTTP {status}")
                } else {
                    format!("HTTP {status}: {message}")
                }
            }
            Self::InvalidResponse(detail) => format!("Invalid response: {detail}"),
            Self::InvalidUrl(detail) => format!("Invalid URL: {detail}"),
        }
    }

    /// Check if this error is a transport failure.
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::HttpError(e) if !e.is_decode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_includes_status() {
        let err = ClientError::ApiError {
            status: 500,
            url: "http://localhost/api/2/search/fields".to_string(),
            message: "index not found".to_string(),
        };
        assert_eq!(err.user_message(), "HTTP 500: index not found");
        assert!(!err.is_network_error());
    }

    #[test]
    fn test_api_error_without_body() {
        let err = ClientError::ApiError {
            status: 404,
            url: "http://localhost/api/2/user_group/list".to_string(),
            message: String::new(),
        };
        assert_eq!(err.user_message(), "HTTP 404");
    }

    #[test]
    fn test_invalid_response_message() {
        let err = ClientError::InvalidResponse("expected value at line 1".to_string());
        assert_eq!(
            err.user_message(),
            "Invalid response: expected value at line 1"
        );
    }
}
