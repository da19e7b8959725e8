//! Session / Route Guard
//!
//! Decides whether protected content may render.
//!
//! ```text
//!              resolve()                 login()/register()
//!   Loading ───────────────► Unauthenticated ───────────────► Authenticated
//!      │                            ▲                               │
//!      └──────── resolve() ─────────┼──────────────►───────────────┘
//!                                   └──────────── logout() ◄────────┘
//! ```
//!
//! - `Loading` renders a placeholder and never redirects.
//! - `Unauthenticated` redirects to the login view once, then renders nothing.
//! - `Authenticated` renders the guarded content.

use crate::client::auth::{AuthBridge, Credentials, RegistrationData};
use crate::shared::{ClientError, Session};

pub const LOGIN_PATH: &str = "/auth/login";

/// Routes reachable without a session
pub const PUBLIC_ROUTES: &[&str] = &["/auth/login", "/auth/signup", "/auth/forgot-password"];

/// Route prefixes that need a session
pub const PROTECTED_PREFIXES: &[&str] = &["/main", "/dashboard", "/chat"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

/// What a guarded view should do on this render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome<T> {
    Placeholder,
    Redirect(String),
    Nothing,
    Content(T),
}

/// Path-level decision for a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(String),
}

pub fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&path)
}

pub fn is_protected_route(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Unauthenticated requests for protected paths go to the login page;
/// everything else proceeds.
pub fn check_path(path: &str, logged_in: bool) -> Navigation {
    if !logged_in && is_protected_route(path) {
        Navigation::Redirect(LOGIN_PATH.to_string())
    } else {
        Navigation::Proceed
    }
}

pub struct RouteGuard {
    bridge: AuthBridge,
    state: GuardState,
    redirected: bool,
    login_path: String,
}

impl RouteGuard {
    pub fn new(bridge: AuthBridge) -> Self {
        Self {
            bridge,
            state: GuardState::Loading,
            redirected: false,
            login_path: LOGIN_PATH.to_string(),
        }
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            GuardState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, GuardState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, GuardState::Loading)
    }

    pub fn bridge(&self) -> &AuthBridge {
        &self.bridge
    }

    /// Settle `Loading` by reading the session store.
    ///
    /// Only leaves `Loading`; once settled, the state moves through
    /// login/register/logout alone. A store that cannot be read counts as
    /// no session.
    pub fn resolve(&mut self) -> &GuardState {
        if self.is_loading() {
            self.state = match self.bridge.current_session() {
                Ok(Some(session)) => GuardState::Authenticated(session),
                Ok(None) => GuardState::Unauthenticated,
                Err(e) => {
                    tracing::warn!("[GUARD] Session unreadable, treating as signed out: {}", e);
                    GuardState::Unauthenticated
                }
            };
            tracing::debug!("[GUARD] Resolved to {}", self.state_name());
        }
        &self.state
    }

    /// Decide this render. The login redirect is issued at most once per
    /// unauthenticated stretch.
    pub fn render<T>(&mut self, content: impl FnOnce(&Session) -> T) -> GuardOutcome<T> {
        match &self.state {
            GuardState::Loading => GuardOutcome::Placeholder,
            GuardState::Authenticated(session) => GuardOutcome::Content(content(session)),
            GuardState::Unauthenticated => {
                if self.redirected {
                    GuardOutcome::Nothing
                } else {
                    self.redirected = true;
                    tracing::info!("[GUARD] No session, redirecting to {}", self.login_path);
                    GuardOutcome::Redirect(self.login_path.clone())
                }
            }
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session, ClientError> {
        self.login_with(Credentials::email(email, password)).await
    }

    pub async fn login_with(&mut self, credentials: Credentials) -> Result<Session, ClientError> {
        let session = self.bridge.authenticate_with(credentials).await?;
        self.enter(session.clone());
        Ok(session)
    }

    pub async fn register(&mut self, data: &RegistrationData) -> Result<Session, ClientError> {
        let session = self.bridge.register(data).await?;
        self.enter(session.clone());
        Ok(session)
    }

    /// Clear the session, then hand back the login redirect
    pub async fn logout(&mut self) -> Result<Navigation, ClientError> {
        self.bridge.logout().await?;
        self.state = GuardState::Unauthenticated;
        // The logout redirect is the one-time redirect for this stretch.
        self.redirected = true;
        Ok(Navigation::Redirect(self.login_path.clone()))
    }

    /// Path decision against the current state
    pub fn navigate(&self, path: &str) -> Navigation {
        check_path(path, self.is_authenticated())
    }

    fn enter(&mut self, session: Session) {
        self.state = GuardState::Authenticated(session);
        self.redirected = false;
    }

    fn state_name(&self) -> &'static str {
        match self.state {
            GuardState::Loading => "loading",
            GuardState::Authenticated(_) => "authenticated",
            GuardState::Unauthenticated => "unauthenticated",
        }
    }
}
