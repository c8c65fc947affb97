//! Configuration for the search backend proxy
//!
//! Settings come from an optional TOML file overlaid by environment variables, e.g.
//! `SEARCHFRONT_API_URL` or `SEARCHFRONT_HTTP__TIMEOUT_SECS`.

use std::path::PathBuf;

use config::{Config, Environment, File};
use searchfront_http::HttpConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default environment variable prefix
pub const ENV_PREFIX: &str = "SEARCHFRONT";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Settings for reaching the search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API; endpoints are appended to its path
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            http: HttpConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Check the settings that would otherwise only fail at request time
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api_url must not be empty".to_string(),
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "http.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    "http://localhost:3030".to_string()
}

/// Loads [`ApiConfig`] from file and environment
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a manager reading the default config file
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Use a different environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("searchfront")
            .join("config.toml")
    }

    /// Load and validate the configuration; a missing file is not an error
    pub fn load(&self) -> Result<ApiConfig, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let api_config: ApiConfig = config.try_deserialize()?;
        api_config.validate()?;
        Ok(api_config)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.api_url, "http://localhost:3030");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("absent.toml"))
            .with_env_prefix("SEARCHFRONT_TEST_MISSING");

        let config = manager.load().unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "api_url = \"https://api.example.com/v1\"").unwrap();
        writeln!(file, "[http]").unwrap();
        writeln!(file, "timeout_secs = 7").unwrap();

        let config = ConfigManager::with_path(path)
            .with_env_prefix("SEARCHFRONT_TEST_FILE")
            .load()
            .unwrap();

        assert_eq!(config.api_url, "https://api.example.com/v1");
        assert_eq!(config.http.timeout_secs, 7);
        assert_eq!(config.http.connect_timeout_secs, 10);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = \"https://file.example.com\"\n").unwrap();

        std::env::set_var("SEARCHFRONT_TEST_ENV_API_URL", "https://env.example.com");
        let config = ConfigManager::with_path(path)
            .with_env_prefix("SEARCHFRONT_TEST_ENV")
            .load();
        std::env::remove_var("SEARCHFRONT_TEST_ENV_API_URL");

        assert_eq!(config.unwrap().api_url, "https://env.example.com");
    }

    #[test]
    fn test_environment_sets_nested_http_field() {
        let dir = tempfile::tempdir().unwrap();

        std::env::set_var("SEARCHFRONT_TEST_NESTED_HTTP__TIMEOUT_SECS", "12");
        let config = ConfigManager::with_path(dir.path().join("absent.toml"))
            .with_env_prefix("SEARCHFRONT_TEST_NESTED")
            .load();
        std::env::remove_var("SEARCHFRONT_TEST_NESTED_HTTP__TIMEOUT_SECS");

        let config = config.unwrap();
        assert_eq!(config.http.timeout_secs, 12);
        assert_eq!(config.api_url, "http://localhost:3030");
    }

    #[test]
    fn test_validation_rejects_empty_url() {
        let config = ApiConfig::default().with_api_url("  ");
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let mut config = ApiConfig::default();
        config.http.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
