//! Persistent key-value preferences.
//!
//! Holds small string values that must survive restarts (currently only the
//! theme). The file store writes a flat TOML table to `preferences.toml` in the
//! config directory.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// String key-value storage
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences persisted to a TOML file
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open the default preferences file
    pub fn open() -> Result<Self> {
        Self::open_at(crate::config::config_dir()?.join("preferences.toml"))
    }

    /// Open preferences at `path`.
    ///
    /// A missing or unparsable file starts empty and is rewritten on the next
    /// `set`. Non-string values are dropped.
    pub fn open_at(path: PathBuf) -> Result<Self> {
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            parse_values(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable preferences {:?}: {}", path, e);
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {:?}", self.path))?;
        Ok(())
    }
}

fn parse_values(content: &str) -> Result<BTreeMap<String, String>, toml::de::Error> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::String(s) => Some((key, s)),
            other => {
                tracing::warn!("Dropping non-string preference {} = {}", key, other);
                None
            }
        })
        .collect())
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory preferences, used when the file store is unavailable
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
