//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the user's theme
//! preference in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::catalog::{self, names};
use crate::models::{ColorPalette, ThemeVariant};

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "SHELL_THEMES_CONFIG_DIR";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Resolves the preference to a concrete variant.
    ///
    /// `Auto` asks the OS; see [`ThemeVariant::detect`].
    #[must_use]
    pub fn resolve(self) -> ThemeVariant {
        match self {
            Self::Auto => ThemeVariant::detect(),
            Self::Dark => ThemeVariant::Dark,
            Self::Light => ThemeVariant::Light,
        }
    }

    /// Lowercase name as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Selected theme identifier (stock, Catppuccin, or `dynamic`)
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

fn default_theme() -> String {
    names::BLUE.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ShellThemes/config.toml`
/// - macOS: `~/Library/Application Support/ShellThemes/config.toml`
/// - Windows: `%APPDATA%\ShellThemes\config.toml`
///
/// `SHELL_THEMES_CONFIG_DIR` replaces the directory when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honouring [`CONFIG_DIR_ENV`].
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ShellThemes");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// The selected theme must be a stock theme, an existing Catppuccin
    /// variant, or `dynamic`.
    pub fn validate(&self) -> Result<()> {
        let theme = self.ui.theme.as_str();
        if !is_known_theme(theme) {
            anyhow::bail!(
                "Unknown theme '{}'. Run 'shell-themes list' to see available themes",
                theme
            );
        }
        Ok(())
    }

    /// Sets the selected theme with validation.
    pub fn set_theme(&mut self, theme: &str) -> Result<()> {
        if !is_known_theme(theme) {
            anyhow::bail!(
                "Unknown theme '{}'. Run 'shell-themes list' to see available themes",
                theme
            );
        }
        self.ui.theme = theme.to_string();
        Ok(())
    }

    /// Resolves the configured theme and mode to a palette.
    ///
    /// Returns the variant used alongside the palette. `None` only for a
    /// Catppuccin identifier that no longer exists.
    pub fn current_palette(&self) -> (ThemeVariant, Option<ColorPalette>) {
        let variant = self.ui.theme_mode.resolve();
        (variant, catalog::theme_by_name(&self.ui.theme, variant))
    }
}

fn is_known_theme(theme: &str) -> bool {
    theme == names::DYNAMIC || catalog::is_stock_theme(theme) || catalog::is_catppuccin_variant(theme)
}
