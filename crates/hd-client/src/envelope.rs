use crate::error::{ClientError, Result as ClientResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// The wrapper every API response arrives in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub error: bool,
    pub code: u16,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    pub trace_id: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload of a successful envelope.
    #[track_caller]
    pub fn into_data(self) -> ClientResult<T> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(ClientError::Api {
                code: self.code,
                message: "response envelope carried no data".to_string(),
                trace_id: self.trace_id,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
