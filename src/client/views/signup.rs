use crate::client::auth::validation::{password_strength, PasswordStrength};
use crate::client::auth::RegistrationData;
use crate::client::guard::RouteGuard;
use crate::client::views::login::{STATUS_PENDING, STATUS_SUCCESS};
use crate::shared::{ClientError, Session};

/// Registration form state
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    data: RegistrationData,
    error: Option<String>,
    status: u16,
    loading: bool,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &RegistrationData {
        &self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Edit any field; clears the current error
    pub fn update(&mut self, edit: impl FnOnce(&mut RegistrationData)) {
        edit(&mut self.data);
        self.error = None;
    }

    /// Live strength meter for the password field
    pub fn password_strength(&self) -> PasswordStrength {
        password_strength(&self.data.password)
    }

    pub fn begin_submit(&mut self) -> Option<RegistrationData> {
        if self.loading {
            tracing::debug!("[VIEW] Registration already in progress");
            return None;
        }
        self.loading = true;
        self.error = None;
        self.status = STATUS_PENDING;
        Some(self.data.clone())
    }

    pub fn finish(&mut self, result: Result<Session, ClientError>) -> Option<Session> {
        self.loading = false;
        match result {
            Ok(session) => {
                self.status = STATUS_SUCCESS;
                self.data.password.clear();
                self.data.password_confirmation.clear();
                Some(session)
            }
            Err(e) => {
                self.status = e.status_code();
                self.error = Some(e.message());
                None
            }
        }
    }

    pub async fn submit(&mut self, guard: &mut RouteGuard) -> Option<Session> {
        let data = self.begin_submit()?;
        let result = guard.register(&data).await;
        self.finish(result)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
