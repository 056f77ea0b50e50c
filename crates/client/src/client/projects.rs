//! Project API methods for [`MonocleClient`].

use crate::client::MonocleClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ProjectsResponse;

impl MonocleClient {
    /// Get the project definitions of an index.
    pub async fn get_projects(&self, index: &str) -> Result<ProjectsResponse> {
        endpoints::get_projects(&self.http, &self.base_url, self.auth_token(), index).await
    }
}
