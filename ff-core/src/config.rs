//! Application configuration management.
//!
//! Holds the application credentials and Graph client settings plus logging
//! preferences. Configuration is persisted as TOML on disk. The facade
//! itself only needs an application id and secret; everything else has a
//! sensible default.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{FbError, FbResult};
use crate::platform::Platform;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Graph client settings, including app credentials.
    #[serde(default)]
    pub graph: GraphConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the underlying Graph client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Application identifier.
    #[serde(default)]
    pub app_id: String,

    /// Application secret.
    #[serde(default)]
    pub app_secret: String,

    /// Graph API origin. Overridable for testing against a local server.
    #[serde(default = "default_graph_url")]
    pub graph_url: String,

    /// Web origin for the login, logout and login-status dialogs.
    #[serde(default = "default_www_url")]
    pub www_url: String,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,

    /// Whether multipart file uploads are enabled on API calls.
    #[serde(default)]
    pub file_upload_support: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_graph_url() -> String {
    constants::GRAPH_URL.to_string()
}

fn default_www_url() -> String {
    constants::WWW_URL.to_string()
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_secret: String::new(),
            graph_url: default_graph_url(),
            www_url: default_www_url(),
            api_timeout_ms: default_api_timeout(),
            file_upload_support: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl GraphConfig {
    /// Default settings with the given application credentials.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            ..Self::default()
        }
    }

    /// Check whether the application credentials are present.
    pub fn is_app_configured(&self) -> bool {
        !self.app_id.is_empty() && !self.app_secret.is_empty()
    }

    /// Strip quotes, whitespace and trailing slashes from an origin.
    pub fn sanitize_origin(origin: &str) -> String {
        origin
            .trim()
            .trim_matches('"')
            .trim()
            .trim_end_matches('/')
            .to_string()
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> FbResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> FbResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> FbResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| FbError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> FbResult<PathBuf> {
        Ok(Platform::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> FbResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Ok(Platform::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Check whether the application credentials are configured.
    pub fn is_app_configured(&self) -> bool {
        self.graph.is_app_configured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.graph.graph_url, "https://graph.facebook.com");
        assert_eq!(config.graph.www_url, "https://www.facebook.com");
        assert_eq!(config.graph.api_timeout_ms, 60_000);
        assert_eq!(config.logging.level, "info");
        assert!(!config.is_app_configured());
    }

    #[test]
    fn test_graph_config_new() {
        let graph = GraphConfig::new("123", "s3cret");
        assert!(graph.is_app_configured());
        assert!(!graph.file_upload_support);
    }

    #[test]
    fn test_sanitize_origin() {
        assert_eq!(
            GraphConfig::sanitize_origin("  \"https://graph.facebook.com/\" "),
            "https://graph.facebook.com"
        );
        assert_eq!(
            GraphConfig::sanitize_origin("http://127.0.0.1:1234//"),
            "http://127.0.0.1:1234"
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[graph]\napp_id = \"42\"\n").unwrap();
        assert_eq!(config.graph.app_id, "42");
        assert_eq!(config.graph.graph_url, "https://graph.facebook.com");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.graph = GraphConfig::new("app", "secret");
        config.logging.json_output = true;
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.graph.app_id, "app");
        assert_eq!(loaded.graph.app_secret, "secret");
        assert!(loaded.logging.json_output);
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "graph = [[").unwrap();
        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, FbError::Config(_)));
    }
}
