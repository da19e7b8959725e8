use uuid::Uuid;

use crate::client::http::HttpClient;
use crate::shared::models::widget::embed_url;
use crate::shared::models::WidgetConfiguration;
use crate::shared::ApiResponse;

/// One widget's settings plus the URL its embed iframe points at
#[derive(Debug, Clone)]
pub struct WidgetPreview {
    widget_id: Uuid,
    widget_base_url: String,
    pub widget: Option<ApiResponse<WidgetConfiguration>>,
}

impl WidgetPreview {
    pub fn new(widget_id: Uuid, widget_base_url: impl Into<String>) -> Self {
        Self {
            widget_id,
            widget_base_url: widget_base_url.into(),
            widget: None,
        }
    }

    /// Preview bound to the client's configured widget host
    pub fn for_client(http: &HttpClient, widget_id: Uuid) -> Self {
        Self::new(widget_id, http.config().widget_base_url())
    }

    pub fn widget_id(&self) -> Uuid {
        self.widget_id
    }

    pub async fn load(&mut self, http: &HttpClient) {
        self.widget = Some(http.widgets().get(self.widget_id).await.into());
    }

    /// `{widget_base_url}/widget/{widget_id}`. Available before the widget loads.
    pub fn embed_url(&self) -> String {
        embed_url(&self.widget_base_url, &self.widget_id.to_string())
    }

    /// `<iframe>` snippet a site owner pastes into their page
    pub fn embed_snippet(&self) -> String {
        format!(
            "<iframe src=\"{}\" title=\"Support chat\" style=\"border:0;width:380px;height:600px\"></iframe>",
            self.embed_url()
        )
    }
}
