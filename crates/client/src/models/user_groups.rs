//! User group models.

use serde::{Deserialize, Serialize};

/// Request body for the user group list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UserGroupListRequest<'a> {
    pub index: &'a str,
}

/// A named group of users and its member count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDefinition {
    pub name: String,
    #[serde(default)]
    pub members: u32,
}

/// Response of the user group list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroupListResponse {
    #[serde(default)]
    pub items: Vec<GroupDefinition>,
}
