use crate::capability::Capability;

use hd_core::UserRole;

use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Session storage error at {path}: {source} {location}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Session entry decode failed: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Capability {capability:?} denied for role {role:?} {location}")]
    Forbidden {
        capability: Capability,
        role: UserRole,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
