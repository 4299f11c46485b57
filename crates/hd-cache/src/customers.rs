use crate::gate::authorize_or_notify;
use crate::store::ResourceCache;

use hd_auth::Capability;
use hd_client::{ApiClient, ClientResult, CustomerService};
use hd_core::{CreateCustomerRequest, Customer, UpdateCustomerRequest};

use std::sync::Arc;

/// Cached reads and cache-patching writes over customers.
pub struct CustomerQueries {
    api: Arc<ApiClient>,
    service: CustomerService,
    cache: ResourceCache<Customer>,
}

impl CustomerQueries {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            service: CustomerService::new(api.clone()),
            cache: ResourceCache::new(),
            api,
        }
    }

    pub async fn list(&self) -> ClientResult<Vec<Customer>> {
        if let Some(cached) = self.cache.list() {
            return Ok(cached);
        }
        self.refresh().await
    }

    pub async fn refresh(&self) -> ClientResult<Vec<Customer>> {
        let customers = self.service.list().await?;
        self.cache.set_list(customers.clone());
        Ok(customers)
    }

    pub async fn get(&self, id: i64) -> ClientResult<Customer> {
        if let Some(cached) = self.cache.detail(id) {
            return Ok(cached);
        }

        let customer = self.service.get(id).await?;
        self.cache.put_detail(customer.clone());
        Ok(customer)
    }

    pub async fn create(&self, request: &CreateCustomerRequest) -> ClientResult<Customer> {
        authorize_or_notify(&self.api, Capability::CreateCustomer)?;

        let customer = self.service.create(request).await?;
        self.cache.upsert_front(customer.clone());
        Ok(customer)
    }

    pub async fn update(&self, id: i64, patch: &UpdateCustomerRequest) -> ClientResult<Customer> {
        authorize_or_notify(&self.api, Capability::EditCustomer)?;

        let customer = self.service.update(id, patch).await?;
        self.cache.upsert_front(customer.clone());
        Ok(customer)
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        authorize_or_notify(&self.api, Capability::DeleteCustomer)?;

        self.service.delete(id).await?;
        self.cache.remove(id);
        Ok(())
    }

    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}
