//! `/chat/conversations/{id}/messages/`

use uuid::Uuid;

use crate::client::http::HttpClient;
use crate::shared::models::{Message, NewMessage};
use crate::shared::ClientError;

pub struct MessagesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> MessagesApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, conversation_id: Uuid) -> Result<Vec<Message>, ClientError> {
        self.http.get(&messages_path(conversation_id)).await
    }

    pub async fn create(
        &self,
        conversation_id: Uuid,
        message: &NewMessage,
    ) -> Result<Message, ClientError> {
        self.http.post(&messages_path(conversation_id), message).await
    }
}

fn messages_path(conversation_id: Uuid) -> String {
    format!("/chat/conversations/{}/messages/", conversation_id)
}
