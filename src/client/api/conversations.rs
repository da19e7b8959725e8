//! `/chat/conversations/`

use uuid::Uuid;

use crate::client::http::HttpClient;
use crate::shared::models::{Conversation, ConversationDraft};
use crate::shared::ClientError;

pub struct ConversationsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ConversationsApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Conversation>, ClientError> {
        self.http.get("/chat/conversations/").await
    }

    pub async fn get(&self, id: Uuid) -> Result<Conversation, ClientError> {
        self.http.get(&format!("/chat/conversations/{}/", id)).await
    }

    pub async fn create(&self, draft: &ConversationDraft) -> Result<Conversation, ClientError> {
        self.http.post("/chat/conversations/", draft).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        draft: &ConversationDraft,
    ) -> Result<Conversation, ClientError> {
        self.http
            .patch(&format!("/chat/conversations/{}/", id), draft)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.http
            .delete(&format!("/chat/conversations/{}/", id))
            .await
    }
}
