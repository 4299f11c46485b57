//! Client-local cache over the domain services.
//!
//! Each resource keeps a disposable copy of server data: one optional list
//! plus per-id detail entries. Mutations patch the cache only after the
//! remote call succeeds, so a rejected write never desynchronizes it. The
//! most-recently-touched record always surfaces at the front of the list.

pub mod activity_logs;
pub mod customers;
mod gate;
pub mod queries;
pub mod store;
pub mod tickets;
pub mod users;

pub use activity_logs::ActivityLogQueries;
pub use customers::CustomerQueries;
pub use gate::PERMISSION_DENIED_MESSAGE;
pub use queries::Queries;
pub use store::{CacheEntry, ResourceCache};
pub use tickets::TicketQueries;
pub use users::UserQueries;

#[cfg(test)]
mod tests;
