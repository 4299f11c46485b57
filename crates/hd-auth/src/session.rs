use hd_core::User;

/// The client-held authenticated-user/token pair.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    pub fn new(user: User, token: String) -> Self {
        Self { user, token }
    }
}
