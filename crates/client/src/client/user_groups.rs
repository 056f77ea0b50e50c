//! User group API methods for [`MonocleClient`].

use crate::client::MonocleClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::UserGroupListResponse;

impl MonocleClient {
    /// List the user groups of an index.
    pub async fn list_user_groups(&self, index: &str) -> Result<UserGroupListResponse> {
        endpoints::list_user_groups(&self.http, &self.base_url, self.auth_token(), index).await
    }
}
