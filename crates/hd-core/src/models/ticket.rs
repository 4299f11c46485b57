use crate::models::refs::{CustomerRef, UserRef};
use crate::models::ticket_priority::TicketPriority;
use crate::models::ticket_status::TicketStatus;
use crate::models::ticket_type::TicketType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A support ticket as returned by the remote API.
///
/// Exactly one customer per ticket; status, priority and type are closed
/// enumerations rejected at deserialization when unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,

    // Workflow
    pub status: TicketStatus,
    pub priority: TicketPriority,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    #[serde(default)]
    pub tags: Vec<String>,

    // Relations
    pub created_by_id: i64,
    pub assigned_to_id: Option<i64>,
    pub customer_id: i64,
    pub created_by: UserRef,
    pub assigned_to: Option<UserRef>,
    pub customer: CustomerRef,
    #[serde(default)]
    pub followers: Vec<UserRef>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
