//! Centralized filesystem paths for studyscope.
//!
//! Uses the [`dirs`] crate for platform-appropriate resolution.
//!
//! | Purpose | macOS | Linux |
//! |---------|-------|-------|
//! | Config  | `~/Library/Application Support/studyscope/` | `~/.config/studyscope/` |
//!
//! Override with the `STUDYSCOPE_CONFIG_DIR` environment variable.

use std::path::PathBuf;

/// Environment variable overriding [`config_dir`].
pub const CONFIG_DIR_ENV: &str = "STUDYSCOPE_CONFIG_DIR";

/// Application config directory.
///
/// Holds `config.toml` and `preferences.toml`.
#[must_use]
pub fn config_dir() -> PathBuf {
    resolve_config_dir(std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))
}

fn resolve_config_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    dirs::config_dir()
        .map(|d| d.join("studyscope"))
        .unwrap_or_else(|| PathBuf::from("/tmp/studyscope-config"))
}

/// Main config file path (`config_dir()/config.toml`).
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Persisted preference file path (`config_dir()/preferences.toml`).
#[must_use]
pub fn preferences_file() -> PathBuf {
    config_dir().join("preferences.toml")
}
