//! Tri-state wrapper for data owned by a remote service.
//!
//! Responsibilities:
//! - Represent a resource that has not been requested, has been loaded, or
//!   failed to load, as a single value the render path can read synchronously.
//! - Convert client results into that value, reducing failures to a message.
//!
//! Does NOT handle:
//! - Tracking whether a request is in flight (see `fetch::FetchCoordinator`).
//!
//! Invariants:
//! - `map` only touches the `Success` payload; `Unrequested` and `Failure`
//!   keep their tag (and message) unchanged.

use serde::Serialize;

/// The state of one remote resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum RemoteData<T> {
    /// No request has completed for this resource yet.
    Unrequested,
    /// The resource was loaded.
    Success(T),
    /// Loading failed; holds a human-readable message.
    Failure(String),
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self::Unrequested
    }
}

impl<T> RemoteData<T> {
    /// Transform the `Success` payload, leaving other states untouched.
    pub fn map<U, F>(self, f: F) -> RemoteData<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Unrequested => RemoteData::Unrequested,
            Self::Success(value) => RemoteData::Success(f(value)),
            Self::Failure(message) => RemoteData::Failure(message),
        }
    }

    /// Borrow the payload.
    pub fn as_ref(&self) -> RemoteData<&T> {
        match self {
            Self::Unrequested => RemoteData::Unrequested,
            Self::Success(value) => RemoteData::Success(value),
            Self::Failure(message) => RemoteData::Failure(message.clone()),
        }
    }

    pub fn is_unrequested(&self) -> bool {
        matches!(self, Self::Unrequested)
    }

    /// True once a result (success or failure) has been stored.
    pub fn is_settled(&self) -> bool {
        !self.is_unrequested()
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<monocle_client::Result<T>> for RemoteData<T> {
    fn from(result: monocle_client::Result<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(e) => Self::Failure(e.user_message()),
        }
    }
}
