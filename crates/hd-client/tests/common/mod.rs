#![allow(dead_code)]

use hd_auth::SessionStore;
use hd_client::{ApiClient, Notification, Notifier};
use hd_config::ApiConfig;
use hd_core::UserRole;

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Notifier that records every toast for assertions.
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            notifications: Mutex::new(Vec::new()),
        })
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// A client wired to a mock server, with its own session directory and a
/// recording notifier.
pub struct TestClient {
    pub api: Arc<ApiClient>,
    pub session: Arc<SessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub session_dir: TempDir,
}

pub fn test_client(base_url: &str) -> TestClient {
    let session_dir = TempDir::new().unwrap();
    let session = Arc::new(SessionStore::open(session_dir.path()).unwrap());
    let notifier = RecordingNotifier::new();

    let config = ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    };
    let api = Arc::new(ApiClient::new(&config, session.clone(), notifier.clone()).unwrap());

    TestClient {
        api,
        session,
        notifier,
        session_dir,
    }
}

/// Sign the test client in without going through /auth/login.
pub fn establish_session(client: &TestClient, role: UserRole, token: &str) {
    let user = serde_json::from_value(user_json(1, role)).unwrap();
    client.session.establish(user, token.to_string()).unwrap();
}

pub fn user_json(id: i64, role: UserRole) -> Value {
    json!({
        "id": id,
        "name": format!("Agent {id}"),
        "email": format!("agent{id}@support.test"),
        "role": role.as_str(),
        "avatar": null,
        "createdAt": "2025-05-01T08:00:00Z",
        "updatedAt": "2025-05-01T08:00:00Z"
    })
}

pub fn ticket_json(id: i64, title: &str, updated_at: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "status": "OPEN",
        "priority": "HIGH",
        "type": "INCIDENT",
        "tags": [],
        "createdById": 1,
        "assignedToId": null,
        "customerId": 4,
        "createdBy": {"id": 1, "name": "Agent 1"},
        "assignedTo": null,
        "customer": {"id": 4, "name": "Acme Co", "email": "it@acme.test"},
        "followers": [],
        "createdAt": "2025-06-01T08:00:00Z",
        "updatedAt": updated_at
    })
}

/// Wrap a payload in the standard success envelope.
pub fn ok_envelope(data: Value) -> Value {
    json!({
        "error": false,
        "code": 200,
        "message": "OK",
        "data": data,
        "traceId": "trace-1"
    })
}

/// Build an application-level error envelope.
pub fn error_envelope(code: u16, message: &str) -> Value {
    json!({
        "error": true,
        "code": code,
        "message": message,
        "data": null,
        "traceId": "trace-1"
    })
}
