use crate::activity_logs::ActivityLogQueries;
use crate::customers::CustomerQueries;
use crate::tickets::TicketQueries;
use crate::users::UserQueries;

use hd_client::ApiClient;

use std::sync::Arc;

/// Every resource's query facade over one shared client.
pub struct Queries {
    pub tickets: TicketQueries,
    pub users: UserQueries,
    pub customers: CustomerQueries,
    pub activity: ActivityLogQueries,
}

impl Queries {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            tickets: TicketQueries::new(api.clone()),
            users: UserQueries::new(api.clone()),
            customers: CustomerQueries::new(api.clone()),
            activity: ActivityLogQueries::new(api),
        }
    }

    /// Drop every cached collection, e.g. after a session change.
    pub fn invalidate_all(&self) {
        self.tickets.invalidate();
        self.users.invalidate();
        self.customers.invalidate();
        self.activity.invalidate();
    }
}
