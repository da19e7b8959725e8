//! Resource API Modules
//!
//! Flat, typed mappings from operation to endpoint over [`HttpClient`]. There
//! is no logic here beyond building paths and bodies; errors come back from
//! the HTTP client unchanged.
//!
//! ```rust,no_run
//! # async fn example(http: chatdesk::client::HttpClient) -> Result<(), chatdesk::shared::ClientError> {
//! let documents = http.documents().list().await?;
//! let widgets = http.widgets().list().await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod conversations;
pub mod documents;
pub mod messages;
pub mod widgets;

pub use auth::AuthApi;
pub use conversations::ConversationsApi;
pub use documents::DocumentsApi;
pub use messages::MessagesApi;
pub use widgets::WidgetsApi;

use crate::client::http::HttpClient;

impl HttpClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi::new(self)
    }

    pub fn conversations(&self) -> ConversationsApi<'_> {
        ConversationsApi::new(self)
    }

    pub fn messages(&self) -> MessagesApi<'_> {
        MessagesApi::new(self)
    }

    pub fn widgets(&self) -> WidgetsApi<'_> {
        WidgetsApi::new(self)
    }
}
