use crate::api::ApiClient;
use crate::error::Result as ClientResult;

use hd_core::validation;
use hd_core::{ActivityLog, CreateActivityLogRequest};

use std::sync::Arc;

use reqwest::Method;

/// Append-only audit trail per ticket.
pub struct ActivityLogService {
    api: Arc<ApiClient>,
}

impl ActivityLogService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list_for_ticket(&self, ticket_id: i64) -> ClientResult<Vec<ActivityLog>> {
        let req = self
            .api
            .request(Method::GET, &format!("/tickets/{ticket_id}/activity-logs"));
        self.api.execute(req).await
    }

    pub async fn get(&self, ticket_id: i64, id: i64) -> ClientResult<ActivityLog> {
        let req = self.api.request(
            Method::GET,
            &format!("/tickets/{ticket_id}/activity-logs/{id}"),
        );
        self.api.execute(req).await
    }

    pub async fn record(
        &self,
        ticket_id: i64,
        request: &CreateActivityLogRequest,
    ) -> ClientResult<ActivityLog> {
        validation::validate_record_activity(request)?;

        let req = self
            .api
            .request(Method::POST, &format!("/tickets/{ticket_id}/activity-logs"))
            .json(request);
        self.api.execute(req).await
    }
}
