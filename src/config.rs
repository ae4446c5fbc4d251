use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::app_data::app_data;

/// Environment variable that overrides `api.key`
pub const API_KEY_ENV: &str = "BREEZY_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

/// OpenWeather access settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the weather service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key (`BREEZY_API_KEY` takes precedence)
    #[serde(default)]
    pub key: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    app_data().api.default_base_url.clone()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Initial window geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> f32 {
    1100.0
}

fn default_height() -> f32 {
    820.0
}

impl ApiConfig {
    /// Resolve the API key, preferring the environment value.
    ///
    /// A missing key resolves to an empty string; the service rejects it at
    /// request time.
    pub fn resolve_key(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.key.clone())
            .unwrap_or_default()
    }

    /// API key from `BREEZY_API_KEY` or the config file
    pub fn api_key(&self) -> String {
        let key = self.resolve_key(std::env::var(API_KEY_ENV).ok());
        if key.is_empty() {
            tracing::warn!("No API key configured; set {} or api.key", API_KEY_ENV);
        }
        key
    }
}

/// Directory holding config.toml and preferences.toml
pub fn config_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "breezy", "Breezy")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    let config_dir = dirs.config_dir();
    std::fs::create_dir_all(config_dir)?;

    Ok(config_dir.to_path_buf())
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, using defaults if it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {:?}", path))?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}
