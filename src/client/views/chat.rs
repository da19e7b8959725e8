use uuid::Uuid;

use crate::client::http::HttpClient;
use crate::shared::models::{Conversation, ConversationDraft, Message, NewMessage};
use crate::shared::ClientError;

/// Longest title derived from an opening message, in characters
pub const MAX_DERIVED_TITLE: usize = 50;

/// Conversation list on the left, selected history and composer on the right
#[derive(Debug, Clone, Default)]
pub struct ChatScreen {
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
    selected: Option<Uuid>,
    input: String,
    error: Option<String>,
    sending: bool,
}

impl ChatScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        let id = self.selected?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub async fn load_conversations(&mut self, http: &HttpClient) -> Result<(), ClientError> {
        let conversations = self.track(http.conversations().list().await)?;
        self.conversations = conversations;
        Ok(())
    }

    /// Select a conversation and load its history
    pub async fn select(&mut self, http: &HttpClient, id: Uuid) -> Result<(), ClientError> {
        let messages = self.track(http.messages().list(id).await)?;
        self.selected = Some(id);
        self.messages = messages;
        Ok(())
    }

    /// Back to the empty "new conversation" pane
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.messages.clear();
    }

    /// Post the composer contents.
    ///
    /// Blank input is ignored and returns `Ok(None)`. With nothing selected, a
    /// conversation titled after the message is created first. The history
    /// is re-read afterwards so replies the backend added show up.
    pub async fn send(&mut self, http: &HttpClient) -> Result<Option<Message>, ClientError> {
        let content = self.input.trim().to_string();
        if content.is_empty() || self.sending {
            return Ok(None);
        }

        self.sending = true;
        let result = self.post(http, &content).await;
        self.sending = false;

        let message = self.track(result)?;
        self.input.clear();
        Ok(Some(message))
    }

    async fn post(&mut self, http: &HttpClient, content: &str) -> Result<Message, ClientError> {
        let conversation_id = match self.selected {
            Some(id) => id,
            None => {
                let draft = ConversationDraft::titled(derive_title(content));
                let conversation = http.conversations().create(&draft).await?;
                tracing::info!("[VIEW] Started conversation {}", conversation.id);
                let id = conversation.id;
                self.conversations.insert(0, conversation);
                self.selected = Some(id);
                self.messages.clear();
                id
            }
        };

        let message = http
            .messages()
            .create(conversation_id, &NewMessage::user(content))
            .await?;
        self.messages.push(message.clone());

        match http.messages().list(conversation_id).await {
            Ok(history) => self.messages = history,
            Err(e) => tracing::warn!("[VIEW] Could not refresh conversation {}: {}", conversation_id, e),
        }

        Ok(message)
    }

    fn track<T>(&mut self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(e) = &result {
            self.error = Some(e.message());
        }
        result
    }
}

/// First line of the message, cut to [`MAX_DERIVED_TITLE`] characters
pub fn derive_title(content: &str) -> String {
    let first_line = content.trim().lines().next().unwrap_or_default().trim();
    first_line.chars().take(MAX_DERIVED_TITLE).collect()
}
