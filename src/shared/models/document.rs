//! Knowledge-base documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An uploaded document as returned by `/documents/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// URL of the stored file
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub file_size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub processed: bool,
    #[serde(default)]
    pub processing_error: String,
}

/// Where a document stands in the backend's ingestion pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingState {
    Pending,
    Ready,
    Failed,
}

impl Document {
    pub fn processing_state(&self) -> ProcessingState {
        if !self.processing_error.is_empty() {
            ProcessingState::Failed
        } else if self.processed {
            ProcessingState::Ready
        } else {
            ProcessingState::Pending
        }
    }
}

/// A file to upload. Sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub title: String,
    pub description: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl NewDocument {
    pub fn new(title: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Partial update for `PATCH /documents/{id}/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
