use crate::envelope::ApiEnvelope;
use crate::error::{ClientError, Result as ClientResult};
use crate::notify::{FALLBACK_ERROR_MESSAGE, Notification, Notifier};

use hd_auth::SessionStore;
use hd_config::ApiConfig;

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;

/// Configured HTTP client for the remote ticketing API.
///
/// Holds the base URL, the per-request timeout, the session store the
/// bearer token is read from on every call, and the notification sink that
/// receives one toast per failed request.
pub struct ApiClient {
    base_url: String,
    fixed_token: Option<String>,
    http: ReqwestClient,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    #[track_caller]
    pub fn new(
        config: &ApiConfig,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientError::from_reqwest)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            fixed_token: config.token.clone(),
            http,
            session,
            notifier,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Build a request against `path`, attaching the bearer token when one
    /// is held — the persisted session first, the configured fixed token as
    /// the fallback.
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("API request: {method} {path}");

        let mut req = self.http.request(method, &url);

        if let Some(token) = self.session.token().or_else(|| self.fixed_token.clone()) {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute a request and unwrap the envelope payload.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        self.execute_envelope(req).await?.into_data()
    }

    /// Execute a request where the envelope payload does not matter
    /// (deletes return an empty `data`).
    pub(crate) async fn execute_empty(&self, req: reqwest::RequestBuilder) -> ClientResult<()> {
        self.execute_envelope::<serde_json::Value>(req).await?;
        Ok(())
    }

    /// Send the request, decode the envelope and centralize the failure
    /// handling: every rejection path emits exactly one notification.
    async fn execute_envelope<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<ApiEnvelope<T>> {
        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                self.notifier
                    .notify(Notification::error(FALLBACK_ERROR_MESSAGE));
                return Err(ClientError::from_reqwest(e));
            }
        };

        let status = response.status();
        debug!("API response: {status}");

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                self.notifier
                    .notify(Notification::error(FALLBACK_ERROR_MESSAGE));
                return Err(ClientError::from_reqwest(e));
            }
        };

        match serde_json::from_str::<ApiEnvelope<T>>(&body) {
            Ok(envelope) if envelope.error => {
                let message = if envelope.message.is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    envelope.message.clone()
                };
                self.notifier.notify(Notification::error(message.clone()));
                Err(ClientError::Api {
                    code: envelope.code,
                    message,
                    trace_id: envelope.trace_id,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Ok(envelope) if !status.is_success() => {
                // Envelope claims success on a failed HTTP status; trust the
                // status and surface whatever message is available.
                let message = if envelope.message.is_empty() {
                    format!("HTTP {status}")
                } else {
                    envelope.message.clone()
                };
                self.notifier.notify(Notification::error(message.clone()));
                Err(ClientError::Api {
                    code: status.as_u16(),
                    message,
                    trace_id: envelope.trace_id,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Ok(envelope) => Ok(envelope),
            Err(parse_err) => {
                if status.is_success() {
                    self.notifier
                        .notify(Notification::error(FALLBACK_ERROR_MESSAGE));
                    Err(ClientError::from_json(parse_err))
                } else {
                    let message = format!("HTTP {status}");
                    self.notifier.notify(Notification::error(message.clone()));
                    Err(ClientError::Api {
                        code: status.as_u16(),
                        message,
                        trace_id: None,
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            }
        }
    }
}
