//! `/widgets/`

use uuid::Uuid;

use crate::client::http::HttpClient;
use crate::shared::models::{WidgetConfiguration, WidgetDraft};
use crate::shared::ClientError;

pub struct WidgetsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> WidgetsApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<WidgetConfiguration>, ClientError> {
        self.http.get("/widgets/").await
    }

    pub async fn get(&self, id: Uuid) -> Result<WidgetConfiguration, ClientError> {
        self.http.get(&format!("/widgets/{}/", id)).await
    }

    pub async fn create(&self, draft: &WidgetDraft) -> Result<WidgetConfiguration, ClientError> {
        self.http.post("/widgets/", draft).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        draft: &WidgetDraft,
    ) -> Result<WidgetConfiguration, ClientError> {
        self.http.patch(&format!("/widgets/{}/", id), draft).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.http.delete(&format!("/widgets/{}/", id)).await
    }
}
