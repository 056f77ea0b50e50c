//! Project definition models.

use serde::{Deserialize, Serialize};

/// Request body for the get projects endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsRequest<'a> {
    pub index: &'a str,
}

/// A project: a named slice of an index selected by repository, branch
/// and file patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_regex: Option<String>,
}

/// Response of the get projects endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub projects: Vec<ProjectDefinition>,
}
