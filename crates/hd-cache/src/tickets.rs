use crate::gate::authorize_or_notify;
use crate::store::ResourceCache;

use hd_auth::Capability;
use hd_client::{ApiClient, ClientResult, TicketService};
use hd_core::{CreateTicketRequest, Ticket, UpdateTicketRequest};

use std::sync::Arc;

/// Cached reads and cache-patching writes over tickets.
///
/// The list is ordered most-recently-updated first; every successful write
/// moves its record to the front. Failed writes leave the cache alone.
pub struct TicketQueries {
    api: Arc<ApiClient>,
    service: TicketService,
    cache: ResourceCache<Ticket>,
}

impl TicketQueries {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            service: TicketService::new(api.clone()),
            cache: ResourceCache::new(),
            api,
        }
    }

    /// The ticket collection, fetched lazily once and served from cache
    /// after.
    pub async fn list(&self) -> ClientResult<Vec<Ticket>> {
        if let Some(cached) = self.cache.list() {
            return Ok(cached);
        }
        self.refresh().await
    }

    /// Force a refetch, replacing the cached list.
    pub async fn refresh(&self) -> ClientResult<Vec<Ticket>> {
        let mut tickets = self.service.list().await?;
        tickets.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        self.cache.set_list(tickets.clone());
        Ok(tickets)
    }

    pub async fn get(&self, id: i64) -> ClientResult<Ticket> {
        if let Some(cached) = self.cache.detail(id) {
            return Ok(cached);
        }

        let ticket = self.service.get(id).await?;
        self.cache.put_detail(ticket.clone());
        Ok(ticket)
    }

    pub async fn create(&self, request: &CreateTicketRequest) -> ClientResult<Ticket> {
        authorize_or_notify(&self.api, Capability::CreateTicket)?;

        let ticket = self.service.create(request).await?;
        self.cache.upsert_front(ticket.clone());
        Ok(ticket)
    }

    pub async fn update(&self, id: i64, patch: &UpdateTicketRequest) -> ClientResult<Ticket> {
        authorize_or_notify(&self.api, Capability::EditTicket)?;

        let ticket = self.service.update(id, patch).await?;
        self.cache.upsert_front(ticket.clone());
        Ok(ticket)
    }

    /// Delete a ticket. A rejected deletion (constraint violations
    /// included) is permanent for this action: the record stays cached, the
    /// server's message is surfaced, and nothing is retried.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        authorize_or_notify(&self.api, Capability::DeleteTicket)?;

        self.service.delete(id).await?;
        self.cache.remove(id);
        Ok(())
    }

    /// Drop the cached collection and details; the next read refetches.
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}
