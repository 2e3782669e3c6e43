//! Manager configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config file not found at {0}")]
    NotFound(PathBuf),
}

/// Push subscription manager configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Base URL of the backend API.
    pub api_base_url: String,
    /// Worker script path, served from the site root.
    pub worker_script: String,
    /// Registration scope.
    pub scope: String,
    /// Bound on the worker activation wait, in seconds.
    pub activation_timeout_secs: u64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            worker_script: "/sw.js".into(),
            scope: "/".into(),
            activation_timeout_secs: 15,
        }
    }
}

impl ManagerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn activation_timeout(&self) -> Duration {
        Duration::from_secs(self.activation_timeout_secs)
    }
}
