//! Authentication test helpers
//!
//! Session fixtures and the backend's auth payloads.

use serde_json::{json, Value};
use uuid::Uuid;

use chatdesk::client::RegistrationData;
use chatdesk::shared::Session;

/// A signed-in session for `username`, token `<username>-token`
pub fn test_session(username: &str) -> Session {
    Session {
        user_id: Some("1".to_string()),
        email: format!("{}@example.com", username),
        username: username.to_string(),
        first_name: String::new(),
        last_name: String::new(),
        access_token: format!("{}-token", username),
        refresh_token: Some(format!("{}-refresh", username)),
    }
}

/// An email no other test uses
pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4().simple())
}

/// Flat login success body, as the backend sends it
pub fn login_body(username: &str, access_token: &str) -> Value {
    json!({
        "username": username,
        "email": format!("{}@example.com", username),
        "first_name": "",
        "last_name": "",
        "access_token": access_token,
        "refresh_token": format!("{}-refresh", access_token),
    })
}

/// Registration input that passes client-side validation
pub fn registration(email: &str) -> RegistrationData {
    RegistrationData {
        email: email.to_string(),
        username: "ada_l".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        password: "Analytical1!".to_string(),
        password_confirmation: "Analytical1!".to_string(),
        phone_number: None,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
