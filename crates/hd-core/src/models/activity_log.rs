use crate::models::refs::UserRef;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a ticket's append-only audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: i64,
    pub action: String,
    pub ticket_id: i64,
    pub created_by_id: i64,
    pub created_by: UserRef,
    pub created_at: DateTime<Utc>,
}
