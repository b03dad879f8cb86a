// SPDX-License-Identifier: MPL-2.0
//! This module handles toast configuration, including loading and saving
//! mount-time settings to a `toast.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Auto-dismiss duration, tap-to-dismiss, presentation mode
//!   and the extra top-drop offset
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Disable auto-dismiss
//! config.toast.duration = iced_toast::ToastDuration::DISABLED;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::toast::{PresentationMode, ToastDuration};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toast.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Settings accepted when a toast site is mounted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Seconds before auto-dismiss; `0` keeps the toast until tapped or cleared.
    #[serde(default)]
    pub duration: ToastDuration,

    /// Whether a tap on the toast dismisses it.
    #[serde(default = "default_tap_to_dismiss")]
    pub tap_to_dismiss: bool,

    /// Where the toast appears and how it animates.
    #[serde(default)]
    pub presentation: PresentationMode,

    /// Extra vertical offset for top-drop toasts.
    #[serde(default = "default_offset_y")]
    pub offset_y: f32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration: ToastDuration::default(),
            tap_to_dismiss: DEFAULT_TAP_TO_DISMISS,
            presentation: PresentationMode::default(),
            offset_y: DEFAULT_OFFSET_Y,
        }
    }
}

impl ToastConfig {
    #[must_use]
    pub fn with_duration(mut self, duration: ToastDuration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_tap_to_dismiss(mut self, enabled: bool) -> Self {
        self.tap_to_dismiss = enabled;
        self
    }

    #[must_use]
    pub fn with_presentation(mut self, mode: PresentationMode) -> Self {
        self.presentation = mode;
        self
    }

    #[must_use]
    pub fn with_offset_y(mut self, offset_y: f32) -> Self {
        self.offset_y = offset_y;
        self
    }
}

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_tap_to_dismiss() -> bool {
    DEFAULT_TAP_TO_DISMISS
}

fn default_offset_y() -> f32 {
    DEFAULT_OFFSET_Y
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory with an optional override.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`)
/// 2. `ICED_TOAST_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform config directory with the app name appended
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default toast config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::BannerTransition;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_documented_values() {
        let config = ToastConfig::default();
        assert_eq!(config.duration.secs(), DEFAULT_DURATION_SECS);
        assert!(config.tap_to_dismiss);
        assert_eq!(config.presentation, PresentationMode::Centered);
        assert_eq!(config.offset_y, 0.0);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            toast: ToastConfig::default()
                .with_duration(ToastDuration::new(2.5))
                .with_tap_to_dismiss(false)
                .with_presentation(PresentationMode::BottomBanner(BannerTransition::Pop))
                .with_offset_y(12.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toast.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("[toast]\npresentation = \"top-drop\"\n")
            .expect("partial config should parse");

        assert_eq!(config.toast.presentation, PresentationMode::TopDrop);
        assert_eq!(config.toast.duration, ToastDuration::default());
        assert!(config.toast.tap_to_dismiss);
    }

    #[test]
    fn negative_duration_is_read_as_disabled() {
        let config: Config =
            toml::from_str("[toast]\nduration = -3.0\n").expect("config should parse");
        assert!(config.toast.duration.is_disabled());
    }

    #[test]
    fn unknown_presentation_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toast.toml");
        fs::write(&config_path, "[toast]\npresentation = \"sideways\"\n")
            .expect("failed to write config");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("sideways")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_returns_warning_for_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
