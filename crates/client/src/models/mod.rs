//! Data models for Monocle API responses.
//!
//! Payloads follow the backend's protobuf JSON mapping: snake_case field
//! names, and fields holding their default value may be omitted entirely,
//! so every collection defaults to empty.

mod projects;
mod search;
mod user_groups;

pub use projects::{ProjectDefinition, ProjectsRequest, ProjectsResponse};
pub use search::{
    Field, FieldType, FieldsRequest, FieldsResponse, SuggestionsRequest, SuggestionsResponse,
};
pub use user_groups::{GroupDefinition, UserGroupListRequest, UserGroupListResponse};
