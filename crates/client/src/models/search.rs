//! Search models: query suggestions and field metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Request body for the suggestions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsRequest<'a> {
    pub index: &'a str,
}

/// Values the backend suggests for query completion in one index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionsResponse {
    pub task_types: Vec<String>,
    pub authors: Vec<String>,
    pub approvals: Vec<String>,
    pub priorities: Vec<String>,
    pub severities: Vec<String>,
    pub projects: Vec<String>,
    pub groups: Vec<String>,
    pub labels: Vec<String>,
}

/// Request body for the fields endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FieldsRequest<'a> {
    pub version: &'a str,
}

/// Value type of a searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FieldType {
    #[serde(rename = "FIELD_DATE")]
    #[default]
    Date,
    #[serde(rename = "FIELD_NUMBER")]
    Number,
    #[serde(rename = "FIELD_TEXT")]
    Text,
    #[serde(rename = "FIELD_BOOL")]
    Bool,
    #[serde(rename = "FIELD_REGEX")]
    Regex,
    /// Unknown or unrecognized field type.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Number => write!(f, "number"),
            Self::Text => write!(f, "text"),
            Self::Bool => write!(f, "bool"),
            Self::Regex => write!(f, "regex"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A field that can be used in a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
}

/// Response of the fields endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldsResponse {
    #[serde(default)]
    pub fields: Vec<Field>,
}
