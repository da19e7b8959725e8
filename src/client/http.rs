//! HTTP Client
//!
//! Thin request wrapper over `reqwest` shared by every resource API.
//!
//! Each call:
//! 1. resolves `endpoint` against the configured API base URL,
//! 2. sends `Content-Type: application/json` (multipart bodies set their own type),
//! 3. attaches `Authorization: Bearer <token>` when the session store holds a session,
//! 4. merges caller headers last,
//! 5. classifies the outcome: 2xx decodes into `T`, 401 is
//!    [`ClientError::Unauthorized`], any other non-2xx is [`ClientError::Api`],
//!    network or decode failures are [`ClientError::Transport`].
//!
//! Failures are logged before they are returned. Nothing is retried and no
//! timeout is applied.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::config::Config;
use crate::client::session_store::SessionStore;
use crate::shared::{ApiResponse, ClientError};

/// Request payload
#[derive(Debug)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(Form),
}

/// Method, body and extra headers for one request
#[derive(Debug)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<RequestBody>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Backend client bound to a base URL and a session store
#[derive(Clone)]
pub struct HttpClient {
    config: Config,
    client: Client,
    sessions: Arc<dyn SessionStore>,
}

impl HttpClient {
    pub fn new(config: Config, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            config,
            client: Client::new(),
            sessions,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Issue a request and decode the 2xx body into `T`
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let method = options.method.clone();
        let result = self.send(endpoint, options).await;
        if let Err(ref e) = result {
            tracing::error!(
                method = %method,
                endpoint = endpoint,
                status = e.status_code(),
                "[API] Request failed: {}",
                e
            );
        }
        result
    }

    /// Same as [`request`](Self::request), folded into the view-facing envelope
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResponse<T> {
        self.request(endpoint, options).await.into()
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        self.request(endpoint, RequestOptions::new(Method::GET)).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, RequestOptions::new(Method::POST).json(body)?)
            .await
    }

    pub async fn patch<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, RequestOptions::new(Method::PATCH).json(body)?)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        self.request(endpoint, RequestOptions::new(Method::DELETE)).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: Form,
    ) -> Result<T, ClientError> {
        self.request(endpoint, RequestOptions::new(Method::POST).multipart(form))
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let url = self.config.api_url(endpoint);
        tracing::debug!("[API] {} {}", options.method, url);

        let mut builder = self.client.request(options.method, &url);
        let mut headers = HeaderMap::new();

        match options.body {
            Some(RequestBody::Multipart(form)) => {
                builder = builder.multipart(form);
            }
            Some(RequestBody::Json(value)) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                builder = builder.body(serde_json::to_vec(&value)?);
            }
            None => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
        }

        if let Some(token) = self.sessions.access_token() {
            headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", token))?);
        }

        // Caller headers replace the defaults above.
        for (name, value) in options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ClientError::validation("headers", format!("Invalid header name: {}", name)))?;
            headers.insert(name, header_value(&value)?);
        }

        let response = builder.headers(headers).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::UNAUTHORIZED {
            // Token refresh is not attempted here.
            let message = error_message(&body).unwrap_or_else(|| "Unauthorized".to_string());
            return Err(ClientError::unauthorized(message));
        }

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| format!("API error: {}", status.as_u16()));
            return Err(ClientError::api(status.as_u16(), message));
        }

        decode_body(&body)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value)
        .map_err(|_| ClientError::validation("headers", "Header value contains invalid characters"))
}

/// Decode a 2xx body. An empty body decodes as JSON `null`, so `()` and
/// `Option<_>` accept `204 No Content`.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        body
    };
    serde_json::from_slice(body)
        .map_err(|e| ClientError::transport(format!("Failed to parse response: {}", e)))
}

/// Pull a displayable message out of an error body.
///
/// Looks at `message`, `error` and `detail` first, then falls back to the first
/// field-level error in the `{ "field": ["msg", ...] }` shape.
pub(crate) fn error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let object = value.as_object()?;

    for key in ["message", "error", "detail"] {
        if let Some(text) = object.get(key).and_then(|v| v.as_str()) {
            if !text.trim().is_empty() {
                return Some(text.to_string());
            }
        }
    }

    object.iter().find_map(|(field, value)| {
        let first = match value {
            serde_json::Value::Array(items) => items.first()?.as_str()?,
            serde_json::Value::String(text) => text.as_str(),
            _ => return None,
        };
        Some(format!("{}: {}", field, first))
    })
}
