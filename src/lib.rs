//! Chatdesk - Support Chatbot Admin Client
//!
//! Client library for the administration side of an AI customer-support
//! chatbot: knowledge-base documents, chat conversations and embeddable chat
//! widgets, all served by a remote REST backend.
//!
//! # Overview
//!
//! This library provides:
//! - An HTTP client with bearer-token attachment and failure classification
//! - Typed resource APIs for documents, conversations, messages and widgets
//! - An auth bridge that turns credentials into a stored session
//! - A route guard that keeps protected views behind a session
//! - Headless views (login, signup, dashboard, chat, widget preview)
//!
//! # Module Structure
//!
//! - **`shared`** - Plain data shared by every layer
//!   - Configuration, error taxonomy, session record
//!   - `ApiResponse` envelope and resource entities
//!
//! - **`client`** - Everything that talks to the backend
//!   - `http` and `api` for requests
//!   - `auth`, `session_store` and `guard` for sessions
//!   - `views` and `state` for screens
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use chatdesk::client::{AuthBridge, Config, HttpClient, MemorySessionStore};
//!
//! # async fn example() -> Result<(), chatdesk::shared::ClientError> {
//! let config = Config::from_env()?;
//! let http = HttpClient::new(config, Arc::new(MemorySessionStore::new()));
//! let auth = AuthBridge::new(http.clone());
//!
//! let session = auth.authenticate("agent@example.com", "secret1").await?;
//! println!("Signed in as {}", session.display_name());
//!
//! for document in http.documents().list().await? {
//!     println!("{}", document.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, ClientError>`. Views fold results into
//! `ApiResponse<T>` so a failed list never hides the ones that loaded.
//!
//! # Thread Safety
//!
//! The session store is the only shared mutable state. It is injected as
//! `Arc<dyn SessionStore>` and guarded by an `RwLock` in the in-memory store.

/// Shared types and data structures
pub mod shared;

/// Backend client, auth, routing and views
pub mod client;
