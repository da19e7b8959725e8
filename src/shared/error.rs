//! Shared Error Types
//!
//! This module defines the single error taxonomy surfaced by the client: every
//! HTTP call, auth operation and session-store access resolves to
//! [`ClientError`] on failure.
//!
//! # Error Categories
//!
//! - `Validation` / `Blocked` - refused on the client, the network is never touched
//! - `Unauthorized` - the backend answered 401
//! - `Api` - any other non-2xx answer, carrying its status
//! - `Transport` - the request could not be sent or the body could not be read
//! - `InvalidResponse` - a 2xx answer without the fields we need
//! - `Session` - the session store failed to read or write
//!
//! # Usage
//!
//! ```rust
//! use chatdesk::shared::error::ClientError;
//!
//! let error = ClientError::validation("password", "Password is required");
//! assert_eq!(error.status_code(), 400);
//! ```
use crate::shared::config::ConfigError;
use thiserror::Error;

/// Errors returned by every client operation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Input failed client-side validation; no request was made
    #[error("{message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The login throttle refused the attempt; no request was made
    #[error("{reason}")]
    Blocked {
        /// Human-readable reason
        reason: String,
    },

    /// The backend answered 401
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Message extracted from the response body
        message: String,
    },

    /// The backend answered with a non-2xx status other than 401
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// Network failure or unreadable response body
    #[error("Transport error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
    },

    /// A successful response was missing required fields
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Human-readable error message
        message: String,
    },

    /// Session store read or write failure
    #[error("Session error: {message}")]
    Session {
        /// Human-readable error message
        message: String,
    },

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new blocked error
    pub fn blocked(reason: impl Into<String>) -> Self {
        Self::Blocked {
            reason: reason.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new invalid-response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a new session error
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    /// Status code a view should display alongside the message
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400
    /// - `Blocked` - 429
    /// - `Unauthorized` - 401
    /// - `Api` - the status from the response
    /// - `Transport` - 503
    /// - `InvalidResponse` - 502
    /// - `Session` / `Config` - 500
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::Blocked { .. } => 429,
            Self::Unauthorized { .. } => 401,
            Self::Api { status, .. } => *status,
            Self::Transport { .. } => 503,
            Self::InvalidResponse { .. } => 502,
            Self::Session { .. } | Self::Config(_) => 500,
        }
    }

    /// Displayable message, without the category prefix
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Blocked { reason } => reason.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::Api { message, .. } => message.clone(),
            Self::Transport { message } => message.clone(),
            Self::InvalidResponse { message } => message.clone(),
            Self::Session { message } => message.clone(),
            Self::Config(err) => err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::transport(format!("Failed to parse response: {}", err))
        } else {
            Self::transport(format!("Network error: {}", err))
        }
    }
}
