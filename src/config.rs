//! Application configuration loaded from TOML with environment overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use studyscope_search::SearchConfig;

use crate::error::{AppError, Result};

/// Environment variables that override API keys from the config file.
pub const ENV_GEMINI_KEY: &str = "STUDYSCOPE_GEMINI_API_KEY";
/// YouTube Data API key override.
pub const ENV_YOUTUBE_KEY: &str = "STUDYSCOPE_YOUTUBE_API_KEY";
/// Custom Search API key override.
pub const ENV_CSE_KEY: &str = "STUDYSCOPE_CSE_KEY";
/// Custom Search engine id override.
pub const ENV_CSE_ID: &str = "STUDYSCOPE_CSE_ID";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fan-out settings: sources, keys, endpoints, caps, models.
    pub search: SearchConfig,
    /// HTML page output settings.
    pub page: PageConfig,
}

/// Standalone HTML page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page `<title>` and header text.
    pub title: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "StudyScope".to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load `path` if it exists, otherwise return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> PathBuf {
        crate::paths::config_file()
    }

    /// Overwrite API keys from environment-style variables.
    ///
    /// `lookup` is usually `|name| std::env::var(name).ok()`. Empty values
    /// are ignored so an exported-but-blank variable does not wipe a key.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let keys = &mut self.search.keys;
        for (name, slot) in [
            (ENV_GEMINI_KEY, &mut keys.gemini),
            (ENV_YOUTUBE_KEY, &mut keys.youtube),
            (ENV_CSE_KEY, &mut keys.custom_search),
            (ENV_CSE_ID, &mut keys.custom_search_engine_id),
        ] {
            if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
                tracing::debug!(variable = name, "API key taken from environment");
                *slot = value;
            }
        }
    }
}
