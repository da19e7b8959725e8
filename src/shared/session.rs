//! Session record
//!
//! The authenticated-user record held for a client's authenticated lifetime.

use serde::{Deserialize, Serialize};

/// Authenticated user plus the backend-issued tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Option<String>,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl Session {
    /// "First Last", falling back to the username when no name is known
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}
