use crate::client::http::HttpClient;
use crate::shared::models::{Conversation, Document, ProcessingState, WidgetConfiguration};
use crate::shared::ApiResponse;

/// Resource counts shown on the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub documents: usize,
    pub ready_documents: usize,
    pub conversations: usize,
    pub widgets: usize,
}

/// The three resource lists, each loaded independently
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub documents: Option<ApiResponse<Vec<Document>>>,
    pub conversations: Option<ApiResponse<Vec<Conversation>>>,
    pub widgets: Option<ApiResponse<Vec<WidgetConfiguration>>>,
    loading: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.documents.is_some() && self.conversations.is_some() && self.widgets.is_some()
    }

    /// Fetch all three lists concurrently. One failing list does not hide the
    /// others.
    pub async fn load(&mut self, http: &HttpClient) {
        self.loading = true;

        let (documents_api, conversations_api, widgets_api) =
            (http.documents(), http.conversations(), http.widgets());
        let (documents, conversations, widgets) = tokio::join!(
            documents_api.list(),
            conversations_api.list(),
            widgets_api.list(),
        );

        self.documents = Some(documents.into());
        self.conversations = Some(conversations.into());
        self.widgets = Some(widgets.into());
        self.loading = false;

        tracing::debug!("[VIEW] Dashboard loaded: {:?}", self.summary());
    }

    /// Counts over whatever loaded successfully; failed lists count as zero
    pub fn summary(&self) -> DashboardSummary {
        let documents = loaded(&self.documents);
        DashboardSummary {
            documents: documents.len(),
            ready_documents: documents
                .iter()
                .filter(|d| d.processing_state() == ProcessingState::Ready)
                .count(),
            conversations: loaded(&self.conversations).len(),
            widgets: loaded(&self.widgets).len(),
        }
    }

    /// Error messages of the lists that failed, labelled by list
    pub fn errors(&self) -> Vec<String> {
        [
            ("Documents", self.documents.as_ref().and_then(|r| r.error())),
            ("Conversations", self.conversations.as_ref().and_then(|r| r.error())),
            ("Widgets", self.widgets.as_ref().and_then(|r| r.error())),
        ]
        .into_iter()
        .filter_map(|(label, error)| error.map(|e| format!("{}: {}", label, e)))
        .collect()
    }
}

fn loaded<T>(response: &Option<ApiResponse<Vec<T>>>) -> &[T] {
    response
        .as_ref()
        .and_then(|r| r.data())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
