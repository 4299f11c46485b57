use std::panic::Location;

use error_location::ErrorLocation;
use hd_auth::AuthError;
use hd_core::CoreError;
use thiserror::Error;

/// Errors that can occur during API calls.
///
/// The variants double as the error taxonomy: transport, application
/// envelope, decode, local validation, and local authorization denial.
/// Callers branch on these exhaustively instead of null/false sentinels.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (code: {code}) {location}")]
    Api {
        code: u16,
        message: String,
        trace_id: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Auth error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(code: u16, message: String, trace_id: Option<String>) -> Self {
        ClientError::Api {
            code,
            message,
            trace_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether this failure means the session is missing, stale or
    /// insufficient. This is how an expired token finally shows up.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Api { code, .. } => *code == 401 || *code == 403,
            Self::Auth { .. } => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<AuthError> for ClientError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        ClientError::Auth {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            CoreError::Validation { field, message, .. } => ClientError::Validation {
                field: field.to_string(),
                message,
                location,
            },
            other => ClientError::Validation {
                field: "payload".to_string(),
                message: other.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
