//! Configuration management for the Monocle dashboard.
//!
//! This crate provides the connection configuration type and a loader that
//! merges builder values, environment variables and an optional `.env` file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig};
