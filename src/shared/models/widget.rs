//! Embeddable chat widget configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfiguration {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub welcome_message: String,
    /// Comma-separated list of domains the widget may be embedded on
    #[serde(default)]
    pub allowed_domains: String,
    #[serde(default)]
    pub enable_file_upload: bool,
    #[serde(default)]
    pub enable_feedback: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub conversation_count: u32,
}

impl WidgetConfiguration {
    /// `allowed_domains` split on commas, blanks dropped
    pub fn allowed_domain_list(&self) -> Vec<&str> {
        self.allowed_domains
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .collect()
    }

    /// URL of the page the embed script loads into its iframe
    pub fn embed_url(&self, widget_base_url: &str) -> String {
        embed_url(widget_base_url, &self.id.to_string())
    }
}

/// `{base}/widget/{id}`
pub fn embed_url(widget_base_url: &str, widget_id: &str) -> String {
    format!("{}/widget/{}", widget_base_url.trim_end_matches('/'), widget_id)
}

/// Body for creating or updating a widget; unset fields keep their server value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WidgetDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_file_upload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_feedback: Option<bool>,
}
