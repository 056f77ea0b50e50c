//! The backend operations the coordinator needs.

use std::future::Future;

use monocle_client::{
    Field, MonocleClient, ProjectsResponse, Result, SuggestionsResponse, UserGroupListResponse,
};

/// Read-only search API used to fill state slots.
///
/// Implementations are cloned into spawned tasks, so they should be cheap
/// to clone (the HTTP client is reference counted).
pub trait SearchApi: Clone + Send + Sync + 'static {
    fn suggestions(&self, index: &str) -> impl Future<Output = Result<SuggestionsResponse>> + Send;

    fn fields(&self) -> impl Future<Output = Result<Vec<Field>>> + Send;

    fn user_groups(
        &self,
        index: &str,
    ) -> impl Future<Output = Result<UserGroupListResponse>> + Send;

    fn projects(&self, index: &str) -> impl Future<Output = Result<ProjectsResponse>> + Send;
}

impl SearchApi for MonocleClient {
    fn suggestions(&self, index: &str) -> impl Future<Output = Result<SuggestionsResponse>> + Send {
        self.get_suggestions(index)
    }

    fn fields(&self) -> impl Future<Output = Result<Vec<Field>>> + Send {
        self.get_fields()
    }

    fn user_groups(
        &self,
        index: &str,
    ) -> impl Future<Output = Result<UserGroupListResponse>> + Send {
        self.list_user_groups(index)
    }

    fn projects(&self, index: &str) -> impl Future<Output = Result<ProjectsResponse>> + Send {
        self.get_projects(index)
    }
}
