//! Centralized constants for the Monocle workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Environment Variables
// =============================================================================

/// Base URL of the Monocle API.
pub const ENV_BASE_URL: &str = "MONOCLE_BASE_URL";

/// Optional bearer token for the Monocle API.
pub const ENV_API_TOKEN: &str = "MONOCLE_API_TOKEN";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "MONOCLE_TIMEOUT";

// =============================================================================
// Runtime
// =============================================================================

/// Capacity of the channel carrying fetch completions back to the store.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;
