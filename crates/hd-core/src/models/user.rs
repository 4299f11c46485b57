use crate::models::user_role::UserRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An agent account. Email is unique on the remote system; role gates
/// mutating operations (ADMIN only) as an advisory client-side check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
