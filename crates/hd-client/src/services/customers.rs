use crate::api::ApiClient;
use crate::error::Result as ClientResult;

use hd_core::validation;
use hd_core::{CreateCustomerRequest, Customer, UpdateCustomerRequest};

use std::sync::Arc;

use reqwest::Method;

/// CRUD over /customers.
pub struct CustomerService {
    api: Arc<ApiClient>,
}

impl CustomerService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ClientResult<Vec<Customer>> {
        let req = self.api.request(Method::GET, "/customers");
        self.api.execute(req).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Customer> {
        let req = self.api.request(Method::GET, &format!("/customers/{id}"));
        self.api.execute(req).await
    }

    pub async fn create(&self, request: &CreateCustomerRequest) -> ClientResult<Customer> {
        validation::validate_create_customer(request)?;

        let req = self.api.request(Method::POST, "/customers").json(request);
        self.api.execute(req).await
    }

    pub async fn update(&self, id: i64, patch: &UpdateCustomerRequest) -> ClientResult<Customer> {
        let req = self
            .api
            .request(Method::PUT, &format!("/customers/{id}"))
            .json(patch);
        self.api.execute(req).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let req = self.api.request(Method::DELETE, &format!("/customers/{id}"));
        self.api.execute_empty(req).await
    }
}
