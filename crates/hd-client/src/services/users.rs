use crate::api::ApiClient;
use crate::error::Result as ClientResult;

use hd_core::validation;
use hd_core::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, User};

use std::sync::Arc;

use reqwest::Method;

/// CRUD over /users, admin-gated on the remote side.
pub struct UserService {
    api: Arc<ApiClient>,
}

impl UserService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ClientResult<Vec<User>> {
        let req = self.api.request(Method::GET, "/users");
        self.api.execute(req).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<User> {
        let req = self.api.request(Method::GET, &format!("/users/{id}"));
        self.api.execute(req).await
    }

    pub async fn create(&self, request: &CreateUserRequest) -> ClientResult<User> {
        validation::validate_create_user(request)?;

        let req = self.api.request(Method::POST, "/users").json(request);
        self.api.execute(req).await
    }

    pub async fn update(&self, id: i64, patch: &UpdateUserRequest) -> ClientResult<User> {
        let req = self
            .api
            .request(Method::PUT, &format!("/users/{id}"))
            .json(patch);
        self.api.execute(req).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let req = self.api.request(Method::DELETE, &format!("/users/{id}"));
        self.api.execute_empty(req).await
    }

    /// Change the signed-in user's own password.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ClientResult<()> {
        validation::validate_change_password(request)?;

        let req = self
            .api
            .request(Method::PUT, "/users/password")
            .json(request);
        self.api.execute_empty(req).await
    }
}
