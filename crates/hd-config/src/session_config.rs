use crate::DEFAULT_SESSION_DIRECTORY;

use serde::Deserialize;

/// Configuration for durable session storage
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the persisted token/user entries, relative to the
    /// config directory
    pub dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_SESSION_DIRECTORY),
        }
    }
}
