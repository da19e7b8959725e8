//! Credential and registration inputs.
//!
//! Both are transient: they live for one auth call and are never persisted or
//! logged. `Debug` output redacts passwords.

use std::fmt;

use serde::Serialize;

/// Login credentials. The backend accepts either an email or a username in
/// its `email` field.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Email { email: String, password: String },
    Username { username: String, password: String },
}

impl Credentials {
    pub fn email(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Email {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn username(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Username {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Pick the variant the way the backend does: anything with an `@` is an email.
    pub fn parse(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        let identifier = identifier.into();
        if identifier.contains('@') {
            Self::email(identifier, password)
        } else {
            Self::username(identifier, password)
        }
    }

    /// The email or username, as typed
    pub fn identifier(&self) -> &str {
        match self {
            Self::Email { email, .. } => email,
            Self::Username { username, .. } => username,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Self::Email { password, .. } | Self::Username { password, .. } => password,
        }
    }

    /// The email, when the credentials carry one
    pub fn email_address(&self) -> Option<&str> {
        match self {
            Self::Email { email, .. } => Some(email.trim()),
            Self::Username { .. } => None,
        }
    }

    pub(crate) fn to_request(&self) -> LoginRequest<'_> {
        LoginRequest {
            email: self.identifier().trim(),
            password: self.password(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email { email, .. } => f
                .debug_struct("Email")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Self::Username { username, .. } => f
                .debug_struct("Username")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Signup form contents
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationData {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirmation: String,
    pub phone_number: Option<String>,
}

impl RegistrationData {
    pub(crate) fn to_request(&self) -> RegisterRequest<'_> {
        RegisterRequest {
            email: self.email.trim(),
            username: self.username.trim(),
            first_name: self.first_name.trim(),
            last_name: self.last_name.trim(),
            password: &self.password,
            password2: &self.password_confirmation,
            phone_number: self
                .phone_number
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty()),
        }
    }
}

impl fmt::Debug for RegistrationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationData")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

/// Body of `POST /auth/login/`
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register/`
#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password: &'a str,
    pub password2: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<&'a str>,
}
