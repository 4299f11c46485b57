use crate::gate::authorize_or_notify;

use hd_auth::Capability;
use hd_client::{ActivityLogService, ApiClient, ClientResult};
use hd_core::{ActivityLog, CreateActivityLogRequest};

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Per-ticket activity trails, newest first. The trail is append-only so a
/// successful record simply prepends to the cached list.
pub struct ActivityLogQueries {
    api: Arc<ApiClient>,
    service: ActivityLogService,
    trails: RwLock<HashMap<i64, Vec<ActivityLog>>>,
}

impl ActivityLogQueries {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            service: ActivityLogService::new(api.clone()),
            trails: RwLock::new(HashMap::new()),
            api,
        }
    }

    pub async fn list_for_ticket(&self, ticket_id: i64) -> ClientResult<Vec<ActivityLog>> {
        if let Some(cached) = self.read_lock().get(&ticket_id) {
            return Ok(cached.clone());
        }

        let logs = self.service.list_for_ticket(ticket_id).await?;
        self.write_lock().insert(ticket_id, logs.clone());
        Ok(logs)
    }

    pub async fn get(&self, ticket_id: i64, id: i64) -> ClientResult<ActivityLog> {
        let cached = self
            .read_lock()
            .get(&ticket_id)
            .and_then(|logs| logs.iter().find(|log| log.id == id).cloned());
        if let Some(log) = cached {
            return Ok(log);
        }

        self.service.get(ticket_id, id).await
    }

    /// Append an entry to a ticket's trail. Members hold this capability
    /// too; it is the one mutation not reserved for admins.
    pub async fn record(
        &self,
        ticket_id: i64,
        request: &CreateActivityLogRequest,
    ) -> ClientResult<ActivityLog> {
        authorize_or_notify(&self.api, Capability::RecordActivity)?;

        let log = self.service.record(ticket_id, request).await?;

        if let Some(trail) = self.write_lock().get_mut(&ticket_id) {
            trail.insert(0, log.clone());
        }

        Ok(log)
    }

    pub fn invalidate(&self) {
        self.write_lock().clear();
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, HashMap<i64, Vec<ActivityLog>>> {
        self.trails.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, HashMap<i64, Vec<ActivityLog>>> {
        self.trails.write().unwrap_or_else(|e| e.into_inner())
    }
}
