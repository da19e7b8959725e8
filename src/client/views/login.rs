use std::fmt;

use crate::client::auth::Credentials;
use crate::client::guard::RouteGuard;
use crate::shared::{ClientError, Session};

/// `status` before any submission has finished
pub const STATUS_PENDING: u16 = 0;
/// `status` after a successful submission
pub const STATUS_SUCCESS: u16 = 1;

/// Login form state
#[derive(Clone, Default)]
pub struct LoginForm {
    identifier: String,
    password: String,
    error: Option<String>,
    failure: Option<ClientError>,
    status: u16,
    loading: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The error behind the last failed submission
    pub fn failure(&self) -> Option<&ClientError> {
        self.failure.as_ref()
    }

    /// `0` pending, `1` success, otherwise the failure's status code
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Email or username; editing clears the current error
    pub fn set_identifier(&mut self, value: impl Into<String>) {
        self.identifier = value.into();
        self.clear_error();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.clear_error();
    }

    /// Start a submission. `None` while one is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.loading {
            tracing::debug!("[VIEW] Login already in progress");
            return None;
        }
        self.loading = true;
        self.clear_error();
        self.status = STATUS_PENDING;
        Some(Credentials::parse(self.identifier.trim(), self.password.clone()))
    }

    /// Apply the outcome of the submission started by [`begin_submit`](Self::begin_submit)
    pub fn finish(&mut self, result: Result<Session, ClientError>) -> Option<Session> {
        self.loading = false;
        match result {
            Ok(session) => {
                self.status = STATUS_SUCCESS;
                self.password.clear();
                Some(session)
            }
            Err(e) => {
                self.status = e.status_code();
                self.error = Some(e.message());
                self.failure = Some(e);
                None
            }
        }
    }

    /// Submit through the guard, so a success also authenticates it
    pub async fn submit(&mut self, guard: &mut RouteGuard) -> Option<Session> {
        let credentials = self.begin_submit()?;
        let result = guard.login_with(credentials).await;
        self.finish(result)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.failure = None;
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .field("error", &self.error)
            .field("failure", &self.failure)
            .field("status", &self.status)
            .field("loading", &self.loading)
            .finish()
    }
}
