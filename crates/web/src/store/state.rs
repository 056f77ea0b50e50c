//! Dashboard state: the selected index, the query, and one slot per remote resource.
//!
//! Invariants:
//! - `selected_index` and `query` are always present (possibly empty).
//! - Slots are independent: storing one never touches another.
//! - Fields are only assigned by the reducer; readers use the accessors.

use monocle_client::{Field, ProjectsResponse, SuggestionsResponse, UserGroupListResponse};
use serde::Serialize;

use crate::remote_data::RemoteData;

/// Application state for one selected index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct State {
    pub(super) selected_index: String,
    pub(super) query: String,
    pub(super) suggestions: RemoteData<SuggestionsResponse>,
    pub(super) fields: RemoteData<Vec<Field>>,
    pub(super) user_groups: RemoteData<UserGroupListResponse>,
    pub(super) projects: RemoteData<ProjectsResponse>,
}

impl State {
    /// Fresh state for `index`: every slot starts `Unrequested`.
    pub fn new(index: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            selected_index: index.into(),
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn selected_index(&self) -> &str {
        &self.selected_index
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &RemoteData<SuggestionsResponse> {
        &self.suggestions
    }

    pub fn fields(&self) -> &RemoteData<Vec<Field>> {
        &self.fields
    }

    pub fn user_groups(&self) -> &RemoteData<UserGroupListResponse> {
        &self.user_groups
    }

    pub fn projects(&self) -> &RemoteData<ProjectsResponse> {
        &self.projects
    }
}
