//! Shared Module
//!
//! Types used by every layer of the client: configuration, the error
//! taxonomy, the session record, the response envelope and the backend's
//! resource entities. Everything here is plain data and serializable.

/// Application configuration
pub mod config;

/// Shared error types
pub mod error;

/// Backend resource entities
pub mod models;

/// Normalized `{ success, data?, error? }` envelope
pub mod response;

/// Authenticated-user session record
pub mod session;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::ClientError;
pub use response::ApiResponse;
pub use session::Session;
