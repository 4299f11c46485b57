//! Integration tests for the session lifecycle using a wiremock mock server

mod common;

use common::{error_envelope, ok_envelope, test_client, user_json};

use hd_auth::{Route, SessionStore};
use hd_client::{AuthService, ClientError};
use hd_core::{LoginRequest, UserRole};

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
    }
}

#[tokio::test]
async fn test_login_persists_session_and_redirects_to_dashboard() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("a@b.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "user": user_json(1, UserRole::Admin),
            "access_token": "tok"
        }))))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let outcome = AuthService::new(client.api.clone())
        .login(&login_request())
        .await
        .unwrap();

    assert_eq!(outcome.redirect, Route::Dashboard);
    assert_eq!(outcome.redirect.as_path(), "/dashboard");
    assert_eq!(outcome.user.role, UserRole::Admin);
    assert_eq!(client.session.token().as_deref(), Some("tok"));

    // A fresh store over the same directory restores the pair without
    // re-authentication.
    let rehydrated = SessionStore::open(client.session_dir.path()).unwrap();
    let session = rehydrated.current().unwrap();
    assert_eq!(session.token, "tok");
    assert_eq!(session.user.id, 1);
}

#[tokio::test]
async fn test_failed_login_leaves_store_anonymous() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(error_envelope(401, "invalid credentials")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = AuthService::new(client.api.clone())
        .login(&login_request())
        .await;

    assert!(result.is_err());
    assert!(!client.session.is_authenticated());
    assert_eq!(
        client.notifier.messages(),
        vec!["invalid credentials".to_string()]
    );
}

#[tokio::test]
async fn test_login_with_malformed_email_is_blocked_locally() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = AuthService::new(client.api.clone())
        .login(&LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ClientError::Validation { .. })));
}

#[tokio::test]
async fn test_logout_twice_stays_anonymous_without_error() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());
    let auth = AuthService::new(client.api.clone());

    assert_eq!(auth.logout().unwrap(), Route::Login);
    assert_eq!(auth.logout().unwrap(), Route::Login);
    assert!(!client.session.is_authenticated());
}

#[tokio::test]
async fn test_register_establishes_session_like_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "user": user_json(5, UserRole::Member),
            "access_token": "fresh-tok"
        }))))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let outcome = AuthService::new(client.api.clone())
        .register(&hd_core::RegisterRequest {
            name: "New Agent".to_string(),
            email: "new@support.test".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(outcome.redirect, Route::Dashboard);
    assert_eq!(client.session.token().as_deref(), Some("fresh-tok"));
}

#[tokio::test]
async fn test_verify_sends_bearer_and_returns_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(user_json(1, UserRole::Admin))),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    common::establish_session(&client, UserRole::Admin, "tok");

    let auth = AuthService::new(client.api.clone());
    assert!(auth.check_token().await);

    let user = auth.verify().await.unwrap();
    assert_eq!(user.id, 1);
}
