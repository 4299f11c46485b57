pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::activity_log::ActivityLog;
pub use models::activity_log_dto::CreateActivityLogRequest;
pub use models::credentials::{LoginData, LoginRequest, RegisterRequest};
pub use models::customer::Customer;
pub use models::customer_dto::{CreateCustomerRequest, UpdateCustomerRequest};
pub use models::refs::{CustomerRef, UserRef};
pub use models::ticket::Ticket;
pub use models::ticket_dto::{CreateTicketRequest, UpdateTicketRequest};
pub use models::ticket_priority::TicketPriority;
pub use models::ticket_status::TicketStatus;
pub use models::ticket_type::TicketType;
pub use models::user::User;
pub use models::user_dto::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest};
pub use models::user_role::UserRole;

#[cfg(test)]
mod tests;
