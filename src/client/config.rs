use std::path::Path;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Backend API base URL
pub const API_URL_ENV: &str = "CHATDESK_API_URL";
/// Public widget base URL
pub const WIDGET_URL_ENV: &str = "CHATDESK_WIDGET_URL";
/// `0` disables the login throttle
pub const LOGIN_THROTTLE_ENV: &str = "CHATDESK_LOGIN_THROTTLE";

/// Client configuration wrapper.
///
/// Read once at startup and cloned into every component that needs it.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_builder(apply_env(AppConfig::builder()))
    }

    /// Optional TOML file, then the process environment on top
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let builder = match path {
            Some(path) if path.exists() => {
                let source = std::fs::read_to_string(path)
                    .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
                AppConfig::builder_from_toml(&source)?
            }
            _ => AppConfig::builder(),
        };
        Self::with_builder(apply_env(builder))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.api_base_url
    }

    pub fn widget_base_url(&self) -> &str {
        &self.app.widget_base_url
    }

    /// Whether the in-process login throttle is active
    pub fn login_throttle(&self) -> bool {
        self.app.login_throttle
    }
}

fn apply_env(mut builder: AppConfigBuilder) -> AppConfigBuilder {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        builder = builder.api_base_url(url);
    }
    if let Ok(url) = std::env::var(WIDGET_URL_ENV) {
        builder = builder.widget_base_url(url);
    }
    if let Ok(flag) = std::env::var(LOGIN_THROTTLE_ENV) {
        builder = builder.login_throttle(flag.trim() != "0");
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(WIDGET_URL_ENV);
        std::env::remove_var(LOGIN_THROTTLE_ENV);
    }

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.server_url(), "http://localhost:8000/api/v1");
        assert!(config.login_throttle());
    }

    #[test]
    fn test_api_url() {
        let config = Config::new();
        let url = config.api_url("/auth/login/");
        assert_eq!(url, "http://localhost:8000/api/v1/auth/login/");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(API_URL_ENV, "https://support.example.com/api/v1/");
        std::env::set_var(LOGIN_THROTTLE_ENV, "0");

        let config = Config::from_env().unwrap();
        assert_eq!(config.server_url(), "https://support.example.com/api/v1");
        assert!(!config.login_throttle());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_url() {
        clear_env();
        std::env::set_var(API_URL_ENV, "::nope::");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_file_then_env() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url = \"https://file.example.com/api\"").unwrap();
        writeln!(file, "widget_url = \"https://widgets.example.com\"").unwrap();

        std::env::set_var(WIDGET_URL_ENV, "https://env.example.com");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.server_url(), "https://file.example.com/api");
        assert_eq!(config.widget_base_url(), "https://env.example.com");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_missing_file_uses_defaults() {
        clear_env();
        let config = Config::load(Some(Path::new("/nonexistent/chatdesk.toml"))).unwrap();
        assert_eq!(config.server_url(), "http://localhost:8000/api/v1");
    }
}
