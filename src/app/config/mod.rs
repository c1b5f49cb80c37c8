// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! user-edited `settings.toml` file. The application never writes it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[enhancement]` - Service endpoint, model and request timeout
//! - `[loading]` - Status message rotation interval
//!
//! The API key is deliberately absent: it is read from the environment only
//! (see [`crate::infrastructure::gemini`]).
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_ENHANCER_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_enhancer::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("model: {}", config.enhancement.model());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
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

/// Remote enhancement service settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EnhancementConfig {
    /// Base URL of the REST API.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Model name used for `generateContent`.
    #[serde(default)]
    pub model: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            model: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EnhancementConfig {
    /// Configured endpoint, or the public API when unset or blank.
    #[must_use]
    pub fn endpoint(&self) -> String {
        non_blank(self.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string()
    }

    #[must_use]
    pub fn model(&self) -> String {
        non_blank(self.model.as_deref())
            .unwrap_or(DEFAULT_MODEL)
            .to_string()
    }

    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Loading indicator settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoadingConfig {
    /// Interval between status messages in milliseconds.
    #[serde(default = "default_status_interval_ms")]
    pub status_interval_ms: Option<u64>,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            status_interval_ms: default_status_interval_ms(),
        }
    }
}

impl LoadingConfig {
    /// Status rotation interval, clamped to the supported range.
    #[must_use]
    pub fn status_interval(&self) -> Duration {
        let ms = self
            .status_interval_ms
            .unwrap_or(DEFAULT_STATUS_INTERVAL_MS)
            .clamp(MIN_STATUS_INTERVAL_MS, MAX_STATUS_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub enhancement: EnhancementConfig,

    #[serde(default)]
    pub loading: LoadingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn default_status_interval_ms() -> Option<u64> {
    Some(DEFAULT_STATUS_INTERVAL_MS)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with the i18n key of a warning to show the user.
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
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings; using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.enhancement.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.enhancement.model(), DEFAULT_MODEL);
        assert_eq!(config.enhancement.timeout(), Duration::from_secs(120));
        assert_eq!(config.loading.status_interval(), Duration::from_millis(2000));
    }

    const FULL_SETTINGS: &str = r#"
[general]
language = "fr"
theme_mode = "light"

[enhancement]
endpoint = "https://proxy.example.test/v1beta"
model = "custom-model"
timeout_secs = 30

[loading]
status_interval_ms = 1500
"#;

    #[test]
    fn load_from_path_reads_every_section() {
        let expected = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            enhancement: EnhancementConfig {
                endpoint: Some("https://proxy.example.test/v1beta".to_string()),
                model: Some("custom-model".to_string()),
                timeout_secs: Some(30),
            },
            loading: LoadingConfig {
                status_interval_ms: Some(1500),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, FULL_SETTINGS).expect("failed to write settings");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, expected);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[enhancement]\nmodel = \"other-model\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.enhancement.model(), "other-model");
        assert_eq!(loaded.enhancement.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(loaded.enhancement.timeout_secs, Some(DEFAULT_TIMEOUT_SECS));
        assert_eq!(loaded.loading, LoadingConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);

        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n").is_err());
    }

    #[test]
    fn blank_strings_fall_back_to_defaults() {
        let config = EnhancementConfig {
            endpoint: Some("   ".to_string()),
            model: Some(String::new()),
            timeout_secs: None,
        };
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn out_of_range_durations_are_clamped() {
        let enhancement = EnhancementConfig {
            timeout_secs: Some(0),
            ..EnhancementConfig::default()
        };
        assert_eq!(enhancement.timeout(), Duration::from_secs(MIN_TIMEOUT_SECS));

        let loading = LoadingConfig {
            status_interval_ms: Some(u64::MAX),
        };
        assert_eq!(
            loading.status_interval(),
            Duration::from_millis(MAX_STATUS_INTERVAL_MS)
        );
    }

    #[test]
    fn unknown_keys_such_as_credentials_are_ignored() {
        let config: Config =
            toml::from_str("[enhancement]\napi_key = \"secret\"\nmodel = \"m\"\n").unwrap();
        assert_eq!(config.enhancement.model(), "m");
        assert!(!format!("{config:?}").contains("secret"));
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(
            base_dir.join("settings.toml"),
            "[general]\nlanguage = \"de\"\ntheme_mode = \"dark\"\n",
        )
        .expect("write file");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("de".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }
}
