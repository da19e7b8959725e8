//! Mock backend helpers for integration tests
//!
//! Wraps a wiremock server mounted under the API prefix together with a
//! client wired to it.

use std::sync::Arc;

use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::MockServer;

use chatdesk::client::{AuthBridge, Config, HttpClient, MemorySessionStore, SessionStore};
use chatdesk::shared::{AppConfig, Session};

/// Path prefix the client is configured with
pub const API_PREFIX: &str = "/api/v1";
pub const WIDGET_BASE_URL: &str = "https://widgets.example.com";
/// Nothing listens here
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9/api/v1";

/// Full request path for an endpoint
pub fn api(endpoint: &str) -> String {
    format!("{}{}", API_PREFIX, endpoint)
}

pub fn config_for(api_base_url: &str) -> Config {
    Config::with_builder(
        AppConfig::builder()
            .api_base_url(api_base_url)
            .widget_base_url(WIDGET_BASE_URL),
    )
    .expect("test config is valid")
}

/// Mock backend plus a client pointed at it
pub struct MockBackend {
    pub server: MockServer,
    pub sessions: Arc<MemorySessionStore>,
    pub http: HttpClient,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self::with_store(MemorySessionStore::new()).await
    }

    pub async fn signed_in(session: Session) -> Self {
        Self::with_store(MemorySessionStore::with_session(session)).await
    }

    async fn with_store(store: MemorySessionStore) -> Self {
        let server = MockServer::start().await;
        let sessions = Arc::new(store);
        let config = config_for(&format!("{}{}", server.uri(), API_PREFIX));
        let http = HttpClient::new(config, sessions.clone());
        Self {
            server,
            sessions,
            http,
        }
    }

    /// Auth bridge over this backend, throttle as configured
    pub fn bridge(&self) -> AuthBridge {
        AuthBridge::new(self.http.clone())
    }

    pub fn stored_session(&self) -> Option<Session> {
        self.sessions.get_session().expect("memory store is readable")
    }

    /// Number of requests the server has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

/// Client against an address nothing listens on
pub fn unreachable_client() -> (HttpClient, Arc<MemorySessionStore>) {
    let sessions = Arc::new(MemorySessionStore::new());
    let http = HttpClient::new(config_for(UNREACHABLE_URL), sessions.clone());
    (http, sessions)
}

pub fn document_json(id: Uuid, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "file": format!("/media/documents/{}.pdf", id),
        "content_type": "application/pdf",
        "file_size": 2048,
        "created_at": "2025-03-01T10:00:00Z",
        "updated_at": "2025-03-01T10:00:00Z",
        "processed": true,
        "processing_error": "",
    })
}

pub fn conversation_json(id: Uuid, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "created_at": "2025-03-01T10:00:00Z",
        "updated_at": "2025-03-01T10:05:00Z",
    })
}

pub fn message_json(id: Uuid, role: &str, content: &str) -> Value {
    json!({
        "id": id,
        "role": role,
        "content": content,
        "created_at": "2025-03-01T10:01:00Z",
    })
}

pub fn widget_json(id: Uuid, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "primary_color": "#2563EB",
        "title": "Need help?",
        "welcome_message": "Hi! Ask me anything.",
        "allowed_domains": "shop.example.com",
        "enable_file_upload": false,
        "enable_feedback": true,
        "created_at": "2025-02-02T08:00:00Z",
        "updated_at": "2025-02-02T08:00:00Z",
        "conversation_count": 3,
    })
}
