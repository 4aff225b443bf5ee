// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[playback]` - Autoplay, volume, mute, loop, speed and step sizes
//! - `[controls]` - Auto-hide delay of the floating controls
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_TEMPO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_tempo::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::playback::{PlaybackSpeed, SeekStep, Volume};
use crate::domain::ui::DwellWindow;
use crate::error::{Error, Result};
use crate::player::{PlayerSettings, Preferences};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key shown when the settings file exists but cannot be used.
pub const WARNING_CONFIG_INVALID: &str = "notification-config-invalid";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Start playing as soon as media is loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Playback volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,

    /// Whether audio is muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,

    /// Whether playback should loop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_enabled: Option<bool>,

    /// Last committed playback speed.
    #[serde(
        default = "default_playback_speed",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_speed: Option<f64>,

    /// Keyboard seek step in seconds (arrow keys).
    #[serde(
        default = "default_seek_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub seek_step_secs: Option<f64>,

    /// Volume change per arrow key press.
    #[serde(
        default = "default_volume_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_step: Option<f32>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay: Some(false),
            volume: default_volume(),
            muted: Some(false),
            loop_enabled: Some(false),
            default_speed: default_playback_speed(),
            seek_step_secs: default_seek_step_secs(),
            volume_step: default_volume_step(),
        }
    }
}

/// Floating controls settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsConfig {
    /// Auto-hide delay for the controls while playing (seconds).
    #[serde(
        default = "default_hide_delay_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_delay_secs: Option<u32>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            hide_delay_secs: default_hide_delay_secs(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Playback settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Floating controls settings.
    #[serde(default)]
    pub controls: ControlsConfig,
}

impl Config {
    /// Player settings with every value clamped to its valid range.
    #[must_use]
    pub fn player_settings(&self) -> PlayerSettings {
        let playback = &self.playback;
        PlayerSettings {
            autoplay: playback.autoplay.unwrap_or(false),
            volume: Volume::new(playback.volume.unwrap_or(DEFAULT_VOLUME)),
            muted: playback.muted.unwrap_or(false),
            loop_enabled: playback.loop_enabled.unwrap_or(false),
            speed: PlaybackSpeed::new(playback.default_speed.unwrap_or(DEFAULT_PLAYBACK_SPEED)),
            seek_step: SeekStep::new(playback.seek_step_secs.unwrap_or(DEFAULT_SEEK_STEP_SECS)),
            volume_step: self.volume_step(),
            dwell: self.dwell_window(),
        }
    }

    /// Auto-hide dwell window, clamped to 1–30 seconds.
    #[must_use]
    pub fn dwell_window(&self) -> DwellWindow {
        DwellWindow::new(
            self.controls
                .hide_delay_secs
                .unwrap_or(DEFAULT_HIDE_DELAY_SECS),
        )
    }

    fn volume_step(&self) -> f32 {
        let step = self.playback.volume_step.unwrap_or(DEFAULT_VOLUME_STEP);
        if step.is_finite() {
            step.clamp(MIN_VOLUME_STEP, MAX_VOLUME_STEP)
        } else {
            DEFAULT_VOLUME_STEP
        }
    }

    /// Writes the persisted player preferences back into the config.
    pub fn apply_preferences(&mut self, prefs: &Preferences) {
        self.playback.volume = Some(prefs.volume.value());
        self.playback.muted = Some(prefs.muted);
        self.playback.loop_enabled = Some(prefs.loop_enabled);
        self.playback.default_speed = Some(prefs.speed.value());
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

fn default_volume_step() -> Option<f32> {
    Some(DEFAULT_VOLUME_STEP)
}

fn default_playback_speed() -> Option<f64> {
    Some(DEFAULT_PLAYBACK_SPEED)
}

fn default_seek_step_secs() -> Option<f64> {
    Some(DEFAULT_SEEK_STEP_SECS)
}

fn default_hide_delay_secs() -> Option<u32> {
    Some(DEFAULT_HIDE_DELAY_SECS)
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

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with the i18n key of a warning explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
                    return (Config::default(), Some(WARNING_CONFIG_INVALID.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            playback: PlaybackConfig {
                autoplay: Some(true),
                volume: Some(0.25),
                muted: Some(true),
                loop_enabled: Some(true),
                default_speed: Some(1.5),
                seek_step_secs: Some(5.0),
                volume_step: Some(0.05),
            },
            controls: ControlsConfig {
                hide_delay_secs: Some(7),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_returns_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[playback]\nvolume = \"loud\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(WARNING_CONFIG_INVALID));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"").expect("parse");
        assert_eq!(config.playback, PlaybackConfig::default());
        assert_eq!(config.controls.hide_delay_secs, Some(DEFAULT_HIDE_DELAY_SECS));
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"");
        assert!(result.is_err());
    }

    #[test]
    fn player_settings_clamp_out_of_range_values() {
        let config = Config {
            playback: PlaybackConfig {
                volume: Some(3.0),
                default_speed: Some(99.0),
                seek_step_secs: Some(0.0),
                volume_step: Some(f32::NAN),
                ..PlaybackConfig::default()
            },
            controls: ControlsConfig {
                hide_delay_secs: Some(0),
            },
            ..Config::default()
        };

        let settings = config.player_settings();
        assert!(settings.volume.is_max());
        assert!(settings.speed.is_max());
        assert!((settings.seek_step.value() - 0.5).abs() < f64::EPSILON);
        assert!((settings.volume_step - DEFAULT_VOLUME_STEP).abs() < f32::EPSILON);
        assert!(settings.dwell.is_min());
    }

    #[test]
    fn default_player_settings_match_defaults() {
        assert_eq!(Config::default().player_settings(), PlayerSettings::default());
    }

    #[test]
    fn apply_preferences_updates_playback_section() {
        let mut config = Config::default();
        config.apply_preferences(&Preferences {
            volume: Volume::new(0.3),
            muted: true,
            loop_enabled: true,
            speed: PlaybackSpeed::new(2.0),
        });
        assert_eq!(config.playback.volume, Some(0.3));
        assert_eq!(config.playback.muted, Some(true));
        assert_eq!(config.playback.loop_enabled, Some(true));
        assert_eq!(config.playback.default_speed, Some(2.0));
    }
}
