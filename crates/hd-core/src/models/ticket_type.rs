use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Incident,
    Question,
    Task,
    Other,
}

impl TicketType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Incident => "INCIDENT",
            Self::Question => "QUESTION",
            Self::Task => "TASK",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for TicketType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "INCIDENT" => Ok(Self::Incident),
            "QUESTION" => Ok(Self::Question),
            "TASK" => Ok(Self::Task),
            "OTHER" => Ok(Self::Other),
            _ => Err(CoreError::InvalidTicketType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
