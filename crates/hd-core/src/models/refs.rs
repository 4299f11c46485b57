use serde::{Deserialize, Serialize};

/// Abbreviated user reference embedded in tickets and activity logs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRef {
    pub id: i64,
    pub name: String,
}

/// Abbreviated customer reference embedded in tickets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerRef {
    pub id: i64,
    pub name: String,
    pub email: String,
}
