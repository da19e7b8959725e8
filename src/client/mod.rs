//! Client Module
//!
//! Everything that talks to the support backend: the HTTP client and the
//! resource APIs layered on it, the auth bridge and session store, the route
//! guard, and the headless views driven by [`AppState`].

pub mod api;
pub mod auth;
pub mod config;
pub mod guard;
pub mod http;
pub mod session_store;
pub mod state;
pub mod types;
pub mod views;

pub use auth::{AuthBridge, Credentials, RegistrationData};
pub use config::Config;
pub use guard::{GuardOutcome, GuardState, Navigation, RouteGuard};
pub use http::{HttpClient, RequestOptions};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
pub use state::AppState;
pub use types::AppView;
