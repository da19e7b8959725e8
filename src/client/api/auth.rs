//! `/auth/`

use serde_json::Value;

use crate::client::auth::credentials::{Credentials, RegistrationData};
use crate::client::auth::payload::{RefreshPayload, TokenPayload, UserProfile};
use crate::client::http::HttpClient;
use crate::shared::ClientError;

pub struct AuthApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<TokenPayload, ClientError> {
        let body: Value = self
            .http
            .post("/auth/login/", &credentials.to_request())
            .await?;
        TokenPayload::from_value(body)
    }

    pub async fn register(&self, data: &RegistrationData) -> Result<TokenPayload, ClientError> {
        let body: Value = self
            .http
            .post("/auth/register/", &data.to_request())
            .await?;
        TokenPayload::from_value(body)
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshPayload, ClientError> {
        let body: Value = self
            .http
            .post("/auth/refresh/", &serde_json::json!({ "refresh": refresh_token }))
            .await?;
        serde_json::from_value(body).map_err(|e| ClientError::invalid_response(e.to_string()))
    }

    /// Invalidate the current token server-side. The response body is ignored.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let _: Value = self
            .http
            .post("/auth/logout/", &serde_json::json!({}))
            .await?;
        Ok(())
    }

    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        let body: Value = self.http.get("/auth/profile/").await?;
        serde_json::from_value(body).map_err(|e| ClientError::invalid_response(e.to_string()))
    }
}
