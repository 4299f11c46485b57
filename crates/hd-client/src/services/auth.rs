use crate::api::ApiClient;
use crate::error::Result as ClientResult;

use hd_auth::Route;
use hd_core::validation;
use hd_core::{LoginData, LoginRequest, RegisterRequest, User};

use std::sync::Arc;

use log::info;
use reqwest::Method;

/// Result of a successful login/signup: the signed-in user plus where the
/// app should navigate next.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub redirect: Route,
}

/// Session lifecycle over /auth.
pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Authenticate and persist the session. A rejected login leaves the
    /// store untouched (anonymous stays anonymous, a previous session stays
    /// live).
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginOutcome> {
        validation::validate_login(request)?;

        let req = self.api.request(Method::POST, "/auth/login").json(request);
        let data: LoginData = self.api.execute(req).await?;

        let session = self
            .api
            .session()
            .establish(data.user, data.access_token)?;
        info!("signed in as {}", session.user.email);

        Ok(LoginOutcome {
            user: session.user,
            redirect: Route::Dashboard,
        })
    }

    /// Create an account and sign straight in — signup establishes a
    /// session exactly like login does.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<LoginOutcome> {
        validation::validate_register(request)?;

        let req = self
            .api
            .request(Method::POST, "/auth/register")
            .json(request);
        let data: LoginData = self.api.execute(req).await?;

        let session = self
            .api
            .session()
            .establish(data.user, data.access_token)?;
        info!("registered and signed in as {}", session.user.email);

        Ok(LoginOutcome {
            user: session.user,
            redirect: Route::Dashboard,
        })
    }

    /// Drop the persisted session. No network call; idempotent.
    pub fn logout(&self) -> ClientResult<Route> {
        self.api.session().clear()?;
        info!("signed out");
        Ok(Route::Login)
    }

    /// Optional server-side token check. Never run automatically — a stale
    /// token otherwise surfaces as an auth error on the next call.
    pub async fn verify(&self) -> ClientResult<User> {
        let req = self.api.request(Method::GET, "/auth/me");
        self.api.execute(req).await
    }

    /// Convenience wrapper around [`Self::verify`] for boolean call sites.
    pub async fn check_token(&self) -> bool {
        self.verify().await.is_ok()
    }
}
