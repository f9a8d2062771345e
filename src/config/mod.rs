// SPDX-License-Identifier: MPL-2.0
//! Read-only user preferences loaded from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[window]` - Initial window size
//!
//! The application never writes this file; the gallery position is not
//! remembered between sessions.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()` (CLI `--config-dir`)
//! 3. Set `ART_SPACE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use art_space::config;
//!
//! let (config, warning) = config::load_with_override(None);
//! if warning.is_none() {
//!     println!("language: {:?}", config.general.language);
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Returns `(width, height)` raised to the minimum supported size.
    #[must_use]
    pub fn clamped_size(&self) -> (u32, u32) {
        (
            self.width.max(MIN_WINDOW_WIDTH),
            self.height.max(MIN_WINDOW_HEIGHT),
        )
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

fn default_window_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, from `base_dir` when given or the default
/// config directory otherwise.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load config, using defaults");
            (Config::default(), Some("error-config-load".to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            "[general]\nlanguage = \"fr\"\ntheme_mode = \"Light\"\n\n[window]\nwidth = 640\nheight = 900\n",
        )
        .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 900);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[general]\nlanguage = \"es\"\n").expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("sepia")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_broken_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[window\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("error-config-load"));
    }

    #[test]
    fn window_size_is_clamped_to_minimum() {
        let window = WindowConfig {
            width: 10,
            height: 4000,
        };
        assert_eq!(window.clamped_size(), (MIN_WINDOW_WIDTH, 4000));
    }
}
