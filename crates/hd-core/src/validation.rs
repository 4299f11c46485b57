//! Client-side form validation.
//!
//! These checks block a submission before any network call is made; the
//! remote API performs the authoritative validation independently.

use crate::models::activity_log_dto::CreateActivityLogRequest;
use crate::models::credentials::{LoginRequest, RegisterRequest};
use crate::models::customer_dto::CreateCustomerRequest;
use crate::models::ticket_dto::CreateTicketRequest;
use crate::models::user_dto::{ChangePasswordRequest, CreateUserRequest};
use crate::{CoreError, Result as CoreResult};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[track_caller]
fn require_non_empty(field: &'static str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, format!("{field} is required")));
    }
    Ok(())
}

/// Minimal email shape check: one '@' with a non-empty local part and a
/// dotted domain, no whitespace.
#[track_caller]
pub fn validate_email(email: &str) -> CoreResult<()> {
    require_non_empty("email", email)?;

    if email.chars().any(char::is_whitespace) {
        return Err(CoreError::validation(
            "email",
            "email cannot contain whitespace",
        ));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(CoreError::validation("email", "email is missing '@'"));
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(CoreError::validation("email", "email is malformed"));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(CoreError::validation("email", "email domain is malformed"));
    }

    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(
            "password",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_login(req: &LoginRequest) -> CoreResult<()> {
    validate_email(&req.email)?;
    require_non_empty("password", &req.password)
}

#[track_caller]
pub fn validate_register(req: &RegisterRequest) -> CoreResult<()> {
    require_non_empty("name", &req.name)?;
    validate_email(&req.email)?;
    validate_password(&req.password)
}

#[track_caller]
pub fn validate_create_ticket(req: &CreateTicketRequest) -> CoreResult<()> {
    require_non_empty("title", &req.title)?;

    if req.customer_id <= 0 {
        return Err(CoreError::validation(
            "customerId",
            "a ticket must reference exactly one customer",
        ));
    }

    Ok(())
}

#[track_caller]
pub fn validate_create_user(req: &CreateUserRequest) -> CoreResult<()> {
    require_non_empty("name", &req.name)?;
    validate_email(&req.email)?;
    validate_password(&req.password)
}

#[track_caller]
pub fn validate_create_customer(req: &CreateCustomerRequest) -> CoreResult<()> {
    require_non_empty("name", &req.name)?;
    validate_email(&req.email)
}

#[track_caller]
pub fn validate_change_password(req: &ChangePasswordRequest) -> CoreResult<()> {
    require_non_empty("oldPassword", &req.old_password)?;
    validate_password(&req.new_password)
}

#[track_caller]
pub fn validate_record_activity(req: &CreateActivityLogRequest) -> CoreResult<()> {
    require_non_empty("action", &req.action)
}
