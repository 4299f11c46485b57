use crate::api::ApiClient;
use crate::error::Result as ClientResult;

use hd_core::validation;
use hd_core::{CreateTicketRequest, Ticket, UpdateTicketRequest};

use std::sync::Arc;

use reqwest::Method;

/// CRUD over /tickets.
pub struct TicketService {
    api: Arc<ApiClient>,
}

impl TicketService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ClientResult<Vec<Ticket>> {
        let req = self.api.request(Method::GET, "/tickets");
        self.api.execute(req).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Ticket> {
        let req = self.api.request(Method::GET, &format!("/tickets/{id}"));
        self.api.execute(req).await
    }

    pub async fn create(&self, request: &CreateTicketRequest) -> ClientResult<Ticket> {
        validation::validate_create_ticket(request)?;

        let req = self.api.request(Method::POST, "/tickets").json(request);
        self.api.execute(req).await
    }

    pub async fn update(&self, id: i64, patch: &UpdateTicketRequest) -> ClientResult<Ticket> {
        let req = self
            .api
            .request(Method::PUT, &format!("/tickets/{id}"))
            .json(patch);
        self.api.execute(req).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let req = self.api.request(Method::DELETE, &format!("/tickets/{id}"));
        self.api.execute_empty(req).await
    }
}
