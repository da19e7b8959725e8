//! `/documents/`

use reqwest::multipart::{Form, Part};
use uuid::Uuid;

use crate::client::http::HttpClient;
use crate::shared::models::{Document, DocumentUpdate, NewDocument};
use crate::shared::ClientError;

pub struct DocumentsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> DocumentsApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Document>, ClientError> {
        self.http.get("/documents/").await
    }

    pub async fn get(&self, id: Uuid) -> Result<Document, ClientError> {
        self.http.get(&format!("/documents/{}/", id)).await
    }

    /// Upload a file. The backend derives content type and size from the part.
    pub async fn create(&self, document: NewDocument) -> Result<Document, ClientError> {
        let form = upload_form(document)?;
        self.http.post_multipart("/documents/", form).await
    }

    pub async fn update(&self, id: Uuid, update: &DocumentUpdate) -> Result<Document, ClientError> {
        self.http.patch(&format!("/documents/{}/", id), update).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.http.delete(&format!("/documents/{}/", id)).await
    }
}

fn upload_form(document: NewDocument) -> Result<Form, ClientError> {
    let mut part = Part::bytes(document.bytes).file_name(document.file_name);
    if let Some(content_type) = document.content_type {
        part = part.mime_str(&content_type).map_err(|_| {
            ClientError::validation("file", format!("Invalid content type: {}", content_type))
        })?;
    }

    Ok(Form::new()
        .text("title", document.title)
        .text("description", document.description)
        .part("file", part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_form_rejects_bad_mime() {
        let document = NewDocument::new("FAQ", "faq.pdf", b"%PDF".to_vec())
            .with_content_type("not a mime type");
        let err = upload_form(document).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_upload_form_accepts_pdf() {
        let document = NewDocument::new("FAQ", "faq.pdf", b"%PDF".to_vec())
            .with_description("Common questions")
            .with_content_type("application/pdf");
        assert!(upload_form(document).is_ok());
    }
}
