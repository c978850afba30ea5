//! Persisted user preferences.
//!
//! Stored as `preferences.toml` next to the config file. Loading never
//! writes; every change made through [`ThemeSettings`] is written
//! immediately.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::theme::Theme;

/// On-disk preference file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Explicit theme choice. `None` follows the system.
    pub theme: Option<Theme>,
}

impl Preferences {
    /// Read preferences; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Preferences`] if the file exists but is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| AppError::Preferences(format!("{}: {e}", path.display())))
    }

    /// Write preferences, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Preferences(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// The effective theme plus where to persist changes.
#[derive(Debug, Clone)]
pub struct ThemeSettings {
    path: PathBuf,
    theme: Theme,
    persisted: bool,
}

impl ThemeSettings {
    /// Resolve the theme: the persisted choice if any, else `system`.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference file exists but cannot be parsed.
    pub fn load(path: impl Into<PathBuf>, system: Theme) -> Result<Self> {
        let path = path.into();
        let prefs = Preferences::load(&path)?;
        let (theme, persisted) = match prefs.theme {
            Some(theme) => (theme, true),
            None => (system, false),
        };
        tracing::debug!(%theme, persisted, "theme resolved");
        Ok(Self {
            path,
            theme,
            persisted,
        })
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the current theme came from the preference file.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Preference file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flip between light and dark and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference file cannot be written. The
    /// in-memory theme is left unchanged in that case.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.set(self.theme.toggled())
    }

    /// Set an explicit theme and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference file cannot be read or written.
    pub fn set(&mut self, theme: Theme) -> Result<Theme> {
        let mut prefs = Preferences::load(&self.path)?;
        prefs.theme = Some(theme);
        prefs.save(&self.path)?;
        self.theme = theme;
        self.persisted = true;
        tracing::info!(%theme, path = %self.path.display(), "theme saved");
        Ok(theme)
    }
}
