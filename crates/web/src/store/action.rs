//! The closed set of state transitions.
//!
//! Actions are the only way to change a [`State`](super::State): index
//! selection, query edits, and one completion action per remote resource.

use monocle_client::{Field, ProjectsResponse, SuggestionsResponse, UserGroupListResponse};

use crate::remote_data::RemoteData;

/// A state transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select another index; resets the whole state.
    ChangeIndex(String),
    /// Replace the search query and mirror it into the address bar.
    SetQuery(String),
    /// Store the result of the fields request.
    FetchFields(RemoteData<Vec<Field>>),
    /// Store the result of the suggestions request.
    FetchSuggestions(RemoteData<SuggestionsResponse>),
    /// Store the result of the user groups request.
    FetchUserGroups(RemoteData<UserGroupListResponse>),
    /// Store the result of the projects request.
    FetchProjects(RemoteData<ProjectsResponse>),
}

impl Action {
    /// Variant name, for logging without payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ChangeIndex(_) => "ChangeIndex",
            Self::SetQuery(_) => "SetQuery",
            Self::FetchFields(_) => "FetchFields",
            Self::FetchSuggestions(_) => "FetchSuggestions",
            Self::FetchUserGroups(_) => "FetchUserGroups",
            Self::FetchProjects(_) => "FetchProjects",
        }
    }

    /// True for the completion actions sent by fetches.
    pub fn is_fetch_result(&self) -> bool {
        !matches!(self, Self::ChangeIndex(_) | Self::SetQuery(_))
    }
}
