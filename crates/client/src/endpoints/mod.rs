//! REST API endpoint implementations.
//!
//! Every Monocle API call is a `POST` of a JSON request body answered by a
//! JSON response body; [`request`] holds the shared send/decode helpers.

mod projects;
mod request;
mod search;
mod user_groups;

pub use projects::get_projects;
pub use request::{parse_json, post_json};
pub use search::{get_fields, get_suggestions};
pub use user_groups::list_user_groups;
