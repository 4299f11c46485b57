use crate::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS};

use serde::Deserialize;

/// Configuration for the remote ticketing API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the remote API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Optional fixed bearer token, used when no session token is present.
    /// Injected at build/deploy time through HD_API_TOKEN.
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            token: None,
        }
    }
}
