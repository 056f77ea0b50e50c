//! Search API methods for [`MonocleClient`].

use crate::client::MonocleClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Field, SuggestionsResponse};

/// Query language version whose fields the dashboard requests.
pub const FIELDS_VERSION: &str = "1";

impl MonocleClient {
    /// Get query suggestions (authors, task types, labels, ...) for an index.
    pub async fn get_suggestions(&self, index: &str) -> Result<SuggestionsResponse> {
        endpoints::get_suggestions(&self.http, &self.base_url, self.auth_token(), index).await
    }

    /// Get the searchable field metadata.
    pub async fn get_fields(&self) -> Result<Vec<Field>> {
        endpoints::get_fields(&self.http, &self.base_url, self.auth_token(), FIELDS_VERSION).await
    }
}
