use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Solved,
    Closed,
    Pending,
}

impl TicketStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Solved => "SOLVED",
            Self::Closed => "CLOSED",
            Self::Pending => "PENDING",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "OPEN" => Ok(Self::Open),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "SOLVED" => Ok(Self::Solved),
            "CLOSED" => Ok(Self::Closed),
            "PENDING" => Ok(Self::Pending),
            _ => Err(CoreError::InvalidTicketStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
