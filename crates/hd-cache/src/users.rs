use crate::gate::authorize_or_notify;
use crate::store::ResourceCache;

use hd_auth::Capability;
use hd_client::{ApiClient, ClientResult, UserService};
use hd_core::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, User};

use std::sync::Arc;

/// Cached reads and cache-patching writes over users. All user management
/// is admin-gated; changing one's own password is not.
pub struct UserQueries {
    api: Arc<ApiClient>,
    service: UserService,
    cache: ResourceCache<User>,
}

impl UserQueries {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            service: UserService::new(api.clone()),
            cache: ResourceCache::new(),
            api,
        }
    }

    pub async fn list(&self) -> ClientResult<Vec<User>> {
        if let Some(cached) = self.cache.list() {
            return Ok(cached);
        }
        self.refresh().await
    }

    pub async fn refresh(&self) -> ClientResult<Vec<User>> {
        let users = self.service.list().await?;
        self.cache.set_list(users.clone());
        Ok(users)
    }

    pub async fn get(&self, id: i64) -> ClientResult<User> {
        if let Some(cached) = self.cache.detail(id) {
            return Ok(cached);
        }

        let user = self.service.get(id).await?;
        self.cache.put_detail(user.clone());
        Ok(user)
    }

    pub async fn create(&self, request: &CreateUserRequest) -> ClientResult<User> {
        authorize_or_notify(&self.api, Capability::ManageUsers)?;

        let user = self.service.create(request).await?;
        self.cache.upsert_front(user.clone());
        Ok(user)
    }

    pub async fn update(&self, id: i64, patch: &UpdateUserRequest) -> ClientResult<User> {
        authorize_or_notify(&self.api, Capability::ManageUsers)?;

        let user = self.service.update(id, patch).await?;
        self.cache.upsert_front(user.clone());
        Ok(user)
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        authorize_or_notify(&self.api, Capability::ManageUsers)?;

        self.service.delete(id).await?;
        self.cache.remove(id);
        Ok(())
    }

    /// Self-service password change; no capability gate.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ClientResult<()> {
        self.service.change_password(request).await
    }

    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}
