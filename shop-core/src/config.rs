//! Storefront Configuration
//!
//! Stored as a small JSON file next to the app data, like any other settings.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Base URL of the storefront REST API (no trailing slash needed)
    pub api_base_url: String,
    /// Per-request timeout, native targets only
    pub request_timeout_secs: u64,
    /// Most toasts kept on screen at once
    pub toast_limit: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 15,
            toast_limit: 4,
        }
    }
}

impl ShopConfig {
    /// Defaults with a different API base URL
    pub fn with_api_url(url: impl Into<String>) -> Self {
        Self {
            api_base_url: url.into(),
            ..Default::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ShopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must be http(s): {}",
                self.api_base_url
            )));
        }
        if self.toast_limit == 0 {
            return Err(ConfigError::Invalid("toast_limit must be at least 1".into()));
        }
        Ok(())
    }

    /// Read config from disk; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = ShopConfig::from_json(r#"{"api_base_url":"https://candles.example/api"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://candles.example/api");
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.toast_limit, 4);
    }

    #[test]
    fn test_rejects_bad_url() {
        let err = ShopConfig::from_json(r#"{"api_base_url":"ftp://nope"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop_config.json");

        assert_eq!(ShopConfig::load(&path).unwrap(), ShopConfig::default());

        let config = ShopConfig {
            request_timeout_secs: 5,
            ..ShopConfig::with_api_url("https://candles.example/api")
        };
        config.save(&path).unwrap();
        assert_eq!(ShopConfig::load(&path).unwrap(), config);
    }
}
