mod capability;

use chrono::Utc;
use hd_core::{User, UserRole};

pub(crate) fn test_user(id: i64, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id,
        name: format!("Agent {id}"),
        email: format!("agent{id}@support.test"),
        role,
        avatar: None,
        created_at: now,
        updated_at: now,
    }
}
