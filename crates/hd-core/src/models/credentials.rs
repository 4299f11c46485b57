use crate::models::user::User;

use serde::{Deserialize, Serialize};

/// Payload for POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for POST /auth/register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login/register response body. The token field name is the one
/// wire shape that is snake_case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub user: User,
    pub access_token: String,
}
