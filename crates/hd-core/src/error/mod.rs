use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid ticket status: {value} {location}")]
    InvalidTicketStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid ticket priority: {value} {location}")]
    InvalidTicketPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid ticket type: {value} {location}")]
    InvalidTicketType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid user role: {value} {location}")]
    InvalidUserRole {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a field-level validation error
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
