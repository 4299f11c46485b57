pub mod activity_logs;
pub mod auth;
pub mod customers;
pub mod tickets;
pub mod users;
