//! Application configuration module
//!
//! Provides the validated configuration shared by every client component:
//! the backend API base URL, the public URL that serves widget pages, and
//! the login-throttle switch. Values come from the builder, a TOML file, or
//! (through [`crate::client::config::Config`]) the process environment.

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Default backend API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Default public URL serving `/widget/{id}` pages
pub const DEFAULT_WIDGET_URL: &str = "http://localhost:3000";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend API base URL, without a trailing slash
    pub api_base_url: String,
    /// Public base URL used for widget embed links, without a trailing slash
    pub widget_base_url: String,
    /// Whether the in-process login throttle is active
    pub login_throttle: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            widget_base_url: DEFAULT_WIDGET_URL.to_string(),
            login_throttle: true,
        }
    }
}

/// On-disk shape of a `chatdesk.toml` file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    widget_url: Option<String>,
    login_throttle: Option<bool>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document into a builder so callers can layer overrides on top.
    pub fn builder_from_toml(source: &str) -> Result<AppConfigBuilder, ConfigError> {
        let file: ConfigFile =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut builder = AppConfigBuilder::default();
        if let Some(url) = file.api_url {
            builder = builder.api_base_url(url);
        }
        if let Some(url) = file.widget_url {
            builder = builder.widget_base_url(url);
        }
        if let Some(enabled) = file.login_throttle {
            builder = builder.login_throttle(enabled);
        }
        Ok(builder)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url(&self.api_base_url)?;
        validate_url(&self.widget_base_url)?;
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default, Clone)]
pub struct AppConfigBuilder {
    api_base_url: Option<String>,
    widget_base_url: Option<String>,
    login_throttle: Option<bool>,
}

impl AppConfigBuilder {
    /// Set the backend API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Set the public widget base URL
    pub fn widget_base_url(mut self, url: impl Into<String>) -> Self {
        self.widget_base_url = Some(url.into());
        self
    }

    /// Enable or disable the login throttle
    pub fn login_throttle(mut self, enabled: bool) -> Self {
        self.login_throttle = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            api_base_url: trim_url(self.api_base_url.unwrap_or(defaults.api_base_url)),
            widget_base_url: trim_url(self.widget_base_url.unwrap_or(defaults.widget_base_url)),
            login_throttle: self.login_throttle.unwrap_or(defaults.login_throttle),
        };
        config.validate()?;
        Ok(config)
    }
}

fn trim_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn validate_url(url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::MissingValue("url"));
    }
    let parsed = Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::InvalidUrl(url.to_string())),
    }
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid config file: {0}")]
    Parse(String),
}
