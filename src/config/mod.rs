// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[compare]` - Compare slider behavior (initial fraction, keyboard steps)
//! - `[diagnostics]` - Diagnostics buffer sizing
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_COMPARE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_compare::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.compare.initial_fraction = Some(0.5);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::compare::{KeyboardStep, KeyboardSteps, RevealFraction};
use crate::domain::diagnostics::BufferCapacity;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode.
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Compare slider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompareConfig {
    /// Divider fraction applied by the initial layout pass (0.0 to 1.0).
    #[serde(
        default = "default_initial_fraction",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_fraction: Option<f32>,

    /// Arrow key step in percentage points.
    #[serde(
        default = "default_keyboard_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyboard_step_percent: Option<f32>,

    /// Arrow key step with Shift held, in percentage points.
    #[serde(
        default = "default_keyboard_large_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyboard_large_step_percent: Option<f32>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            initial_fraction: default_initial_fraction(),
            keyboard_step_percent: default_keyboard_step(),
            keyboard_large_step_percent: default_keyboard_large_step(),
        }
    }
}

impl CompareConfig {
    /// Initial fraction, clamped to `[0, 1]`.
    #[must_use]
    pub fn reveal_fraction(&self) -> RevealFraction {
        self.initial_fraction
            .map_or_else(RevealFraction::default, RevealFraction::new)
    }

    /// Arrow key steps, each clamped to its valid range.
    #[must_use]
    pub fn keyboard_steps(&self) -> KeyboardSteps {
        KeyboardSteps {
            small: self
                .keyboard_step_percent
                .map_or_else(KeyboardStep::default, KeyboardStep::new),
            large: self
                .keyboard_large_step_percent
                .map_or_else(KeyboardStep::large, KeyboardStep::new),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory before the oldest are evicted.
    #[serde(
        default = "default_diagnostics_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_diagnostics_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        self.buffer_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub compare: CompareConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_initial_fraction() -> Option<f32> {
    Some(DEFAULT_REVEAL_FRACTION)
}

fn default_keyboard_step() -> Option<f32> {
    Some(DEFAULT_KEYBOARD_STEP_PERCENT)
}

fn default_keyboard_large_step() -> Option<f32> {
    Some(DEFAULT_KEYBOARD_LARGE_STEP_PERCENT)
}

fn default_diagnostics_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_CAPACITY)
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
/// default config with an i18n key describing the problem.
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
                    eprintln!("Failed to load config from {:?}: {}", path, err);
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
