//! HTTP client for the remote ticketing API.
//!
//! One configured [`ApiClient`] is shared by all domain services; every
//! response travels in the `{error, code, message, data, traceId}` envelope
//! and every failure is surfaced through the [`Notifier`] before the call
//! rejects.

pub mod api;
pub mod envelope;
pub mod error;
pub mod notify;
pub mod services;

pub use api::ApiClient;
pub use envelope::ApiEnvelope;
pub use error::{ClientError, Result as ClientResult};
pub use notify::{LogNotifier, Notification, NotificationLevel, Notifier, NullNotifier};
pub use services::activity_logs::ActivityLogService;
pub use services::auth::{AuthService, LoginOutcome};
pub use services::customers::CustomerService;
pub use services::tickets::TicketService;
pub use services::users::UserService;
