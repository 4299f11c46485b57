use serde::{Deserialize, Serialize};

/// Payload for POST /tickets/:id/activity-logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityLogRequest {
    pub action: String,
}
