//! Monocle web API client.
//!
//! This crate provides a type-safe async client for the Monocle backend
//! API consumed by the dashboard: search suggestions, search field
//! metadata, user groups and project definitions.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::MonocleClient;
pub use client::builder::MonocleClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    Field, FieldType, FieldsResponse, GroupDefinition, ProjectDefinition, ProjectsResponse,
    SuggestionsResponse, UserGroupListResponse,
};
