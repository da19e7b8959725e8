//! Authentication Bridge
//!
//! Exchanges credentials with the backend, maps the answer onto a
//! [`Session`], and keeps the session store in step:
//!
//! - input is validated first; a validation failure never reaches the network
//! - the login throttle (when enabled) runs next, also without a request
//! - a successful login or registration replaces the stored session
//! - a failed call leaves the store exactly as it was
//! - logout tells the backend (best effort) and then clears the store
//!
//! Passwords are never logged.

pub mod credentials;
pub mod payload;
pub mod throttle;
pub mod validation;

pub use credentials::{Credentials, RegistrationData};
pub use payload::{RefreshPayload, TokenPayload, UserProfile};
pub use throttle::{LoginThrottle, ThrottlePolicy};

use std::sync::Arc;

use chrono::Utc;

use crate::client::http::HttpClient;
use crate::shared::{ClientError, Session};

/// Login, registration and logout over one session store
#[derive(Clone)]
pub struct AuthBridge {
    http: HttpClient,
    throttle: Option<Arc<LoginThrottle>>,
}

impl AuthBridge {
    /// Uses the HTTP client's session store; the throttle follows the config flag.
    pub fn new(http: HttpClient) -> Self {
        let throttle = http
            .config()
            .login_throttle()
            .then(|| Arc::new(LoginThrottle::default()));
        Self { http, throttle }
    }

    pub fn with_throttle(mut self, throttle: LoginThrottle) -> Self {
        self.throttle = Some(Arc::new(throttle));
        self
    }

    pub fn without_throttle(mut self) -> Self {
        self.throttle = None;
        self
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Log in with an email and password
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        self.authenticate_with(Credentials::email(email, password))
            .await
    }

    pub async fn authenticate_with(&self, credentials: Credentials) -> Result<Session, ClientError> {
        let identifier = credentials.identifier().trim().to_string();

        if let Err(e) = validation::validate_login(&credentials) {
            tracing::warn!("[AUTH] Login rejected before sending: {}", e);
            return Err(e);
        }

        if let Some(throttle) = &self.throttle {
            if let Err(e) = throttle.check(&identifier, Utc::now()) {
                tracing::warn!("[AUTH] Login blocked for {}: {}", identifier, e);
                return Err(e);
            }
        }

        let result = match self.http.auth().login(&credentials).await {
            Ok(payload) => payload.into_session(credentials.email_address()),
            Err(e) => Err(e),
        };

        self.record_attempt(&identifier, &result);

        let session = result.inspect_err(|e| {
            tracing::warn!("[AUTH] Login failed for {}: {}", identifier, e);
        })?;
        self.store(session, "Login", &identifier)
    }

    /// Create an account; the backend answers with tokens, so this also signs in.
    pub async fn register(&self, data: &RegistrationData) -> Result<Session, ClientError> {
        let identifier = data.email.trim().to_string();

        if let Err(e) = validation::validate_registration(data) {
            tracing::warn!("[AUTH] Registration rejected before sending: {}", e);
            return Err(e);
        }

        let session = match self.http.auth().register(data).await {
            Ok(payload) => payload.into_session(Some(&identifier)),
            Err(e) => Err(e),
        }
        .inspect_err(|e| {
            tracing::warn!("[AUTH] Registration failed for {}: {}", identifier, e);
        })?;
        self.store(session, "Registration", &identifier)
    }

    /// Clear the session. The backend is told first when a session exists;
    /// its failure is logged and does not keep the user signed in.
    pub async fn logout(&self) -> Result<(), ClientError> {
        if let Some(session) = self.current_session()? {
            if let Err(e) = self.http.auth().logout().await {
                tracing::warn!("[AUTH] Backend logout failed for {}: {}", session.username, e);
            }
            self.http.sessions().sign_out()?;
            tracing::info!("[AUTH] Logged out {}", session.username);
        } else {
            self.http.sessions().sign_out()?;
        }
        Ok(())
    }

    pub fn current_session(&self) -> Result<Option<Session>, ClientError> {
        self.http.sessions().get_session()
    }

    /// Fetch the signed-in user's profile from the backend
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        self.http.auth().profile().await
    }

    fn store(&self, session: Session, action: &str, identifier: &str) -> Result<Session, ClientError> {
        self.http.sessions().sign_in(session.clone())?;
        tracing::info!("[AUTH] {} succeeded for {} ({})", action, identifier, session.username);
        Ok(session)
    }

    fn record_attempt(&self, identifier: &str, result: &Result<Session, ClientError>) {
        let Some(throttle) = &self.throttle else {
            return;
        };
        match result {
            Ok(_) => throttle.record(identifier, true, Utc::now()),
            // An unreachable or failing backend says nothing about the credentials.
            Err(ClientError::Transport { .. }) => {}
            Err(ClientError::Api { status, .. }) if *status >= 500 => {}
            Err(_) => throttle.record(identifier, false, Utc::now()),
        }
    }
}
