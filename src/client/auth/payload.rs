//! Backend auth payloads and their mapping onto [`Session`].
//!
//! The backend has answered logins in two shapes over time:
//!
//! - flat: `{ id?, username, email, first_name, last_name, access_token, refresh_token }`
//! - nested: `{ user: { id, username, email, first_name, last_name }, access, refresh }`
//!
//! Both deserialize into [`TokenPayload`]; nested user fields win over flat ones.

use serde::Deserialize;
use serde_json::Value;

use crate::shared::{ClientError, Session};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Success body of `/auth/login/` and `/auth/register/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenPayload {
    #[serde(default)]
    pub user: Option<UserPayload>,
    #[serde(flatten)]
    pub flat: UserPayload,
    #[serde(default, alias = "access")]
    pub access_token: Option<String>,
    #[serde(default, alias = "refresh")]
    pub refresh_token: Option<String>,
}

/// Success body of `/auth/refresh/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshPayload {
    #[serde(alias = "access_token")]
    pub access: String,
}

/// Body of `/auth/profile/`
pub type UserProfile = UserPayload;

impl TokenPayload {
    /// Decode a success body; anything that is not an object of the expected
    /// shape is an invalid response rather than a transport failure.
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        if !value.is_object() {
            return Err(ClientError::invalid_response(
                "expected a JSON object from the auth endpoint",
            ));
        }
        serde_json::from_value(value).map_err(|e| ClientError::invalid_response(e.to_string()))
    }

    /// Build the session. `fallback_email` fills in the email when the payload
    /// leaves it out (the login response does not always echo it).
    pub fn into_session(self, fallback_email: Option<&str>) -> Result<Session, ClientError> {
        let nested = self.user.unwrap_or_default();
        let flat = self.flat;

        let username = non_empty(nested.username.or(flat.username))
            .ok_or_else(|| ClientError::invalid_response("missing username"))?;
        let access_token = non_empty(self.access_token)
            .ok_or_else(|| ClientError::invalid_response("missing access token"))?;

        Ok(Session {
            user_id: nested.id.or(flat.id).and_then(id_to_string),
            email: non_empty(nested.email.or(flat.email))
                .or_else(|| fallback_email.map(str::to_string))
                .unwrap_or_default(),
            username,
            first_name: nested.first_name.or(flat.first_name).unwrap_or_default(),
            last_name: nested.last_name.or(flat.last_name).unwrap_or_default(),
            access_token,
            refresh_token: non_empty(self.refresh_token),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn id_to_string(id: Value) -> Option<String> {
    match id {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
