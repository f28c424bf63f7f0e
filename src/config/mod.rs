// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{DescribeError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

/// Prefix for configuration environment variables, e.g. `IMAGE_DESCRIBER_SERVER__PORT`.
pub const ENV_PREFIX: &str = "IMAGE_DESCRIBER";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_config_path())
    }

    /// Same as [`AppConfig::load`] but reads the optional config file from `path`.
    pub fn load_from(path: &str) -> Result<Self> {
        Self::build(path, Self::environment())
    }

    /// `IMAGE_DESCRIBER_` prefix, `__` between nested keys
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn build(path: &str, environment: Environment) -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::with_name(path).required(false))
            .add_source(environment)
            .build()
            .map_err(|e| DescribeError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| DescribeError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".image-describer")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reads the variables from `vars` instead of the process environment
    fn load_with_env(path: &str, vars: &[(&str, &str)]) -> AppConfig {
        let mut map = config::Map::new();
        for (key, value) in vars {
            map.insert(key.to_string(), value.to_string());
        }
        AppConfig::build(path, AppConfig::environment().source(Some(map))).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_upload_bytes, 20 * 1024 * 1024);
        assert_eq!(config.openai.api_base_url, "https://api.openai.com/v1");
        assert!(config.openai.timeout_seconds.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9123\n\n[openai]\ntimeout_seconds = 45\n\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = load_with_env(path.to_str().unwrap(), &[]);
        assert_eq!(config.server.port, 9123);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.openai.timeout_seconds, Some(45));
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = load_with_env(path.to_str().unwrap(), &[]);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9123\n").unwrap();

        let config = load_with_env(
            path.to_str().unwrap(),
            &[
                ("IMAGE_DESCRIBER_SERVER__PORT", "9000"),
                ("IMAGE_DESCRIBER_SERVER__MAX_UPLOAD_BYTES", "1234"),
                ("IMAGE_DESCRIBER_OPENAI__TIMEOUT_SECONDS", "7"),
                ("OTHER_SERVER__PORT", "1"),
            ],
        );
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.max_upload_bytes, 1234);
        assert_eq!(config.openai.timeout_seconds, Some(7));
        assert_eq!(config.server.host, "127.0.0.1");
    }
}
