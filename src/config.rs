use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// xAI chat completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.x.ai/v1/chat/completions";
/// Model used when the caller does not name one
pub const DEFAULT_MODEL: &str = "grok-3-fast";

/// Configuration for docsift
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Chat completion API settings
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    pub model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Load config from the config directory, or defaults if there is none
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Load config from an explicit file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path).map_err(|err| Error::io(config_path, err))?;
        toml::from_str(&content).map_err(|err| Error::Config {
            path: config_path.to_path_buf(),
            detail: err.to_string(),
        })
    }

    /// Save config to the config directory
    pub fn save(&self) -> Result<Option<PathBuf>> {
        let Some(config_path) = Self::get_config_path() else {
            return Ok(None);
        };
        self.save_to(&config_path)?;
        Ok(Some(config_path))
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
        }

        let content = toml::to_string_pretty(self).map_err(|err| Error::Config {
            path: config_path.to_path_buf(),
            detail: err.to_string(),
        })?;
        fs::write(config_path, content).map_err(|err| Error::io(config_path, err))
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docsift").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_xai() {
        let config = Config::default();
        assert_eq!(config.api.endpoint, "https://api.x.ai/v1/chat/completions");
        assert_eq!(config.api.model, "grok-3-fast");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[api]\nmodel = \"grok-4\"\n").unwrap();
        assert_eq!(config.api.model, "grok-4");
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.endpoint = "http://127.0.0.1:9999/v1/chat/completions".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nmodel = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config { .. })));
    }
}
