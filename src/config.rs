//! User preferences for the catalog screen.
//!
//! Holds the theme choice, the startup help toggle, and the profile the side
//! menu displays. Stored as TOML under the platform config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "MYSTIC_CATALOG_CONFIG_DIR";

/// Maximum length of the profile display name.
const MAX_DISPLAY_NAME_LEN: usize = 50;

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

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => anyhow::bail!("Invalid theme mode '{s}'. Must be 'auto', 'light', or 'dark'"),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Profile shown in the side menu. Passed through to the menu untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    /// Name shown at the top of the menu
    #[serde(default)]
    pub display_name: Option<String>,
    /// Sun sign shown under the name
    #[serde(default)]
    pub sun_sign: Option<String>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/MysticCatalog/config.toml`
/// - macOS: `~/Library/Application Support/MysticCatalog/config.toml`
/// - Windows: `%APPDATA%\MysticCatalog\config.toml`
///
/// The directory can be overridden with `MYSTIC_CATALOG_CONFIG_DIR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Menu profile
    #[serde(default)]
    pub profile: ProfileConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("MysticCatalog");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the directory log files are written to.
    pub fn logs_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration content.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - display name is non-blank and at most 50 characters (if set)
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.profile.display_name {
            if name.trim().is_empty() {
                anyhow::bail!("Profile display name cannot be blank");
            }
            if name.chars().count() > MAX_DISPLAY_NAME_LEN {
                anyhow::bail!(
                    "Profile display name exceeds maximum length of {MAX_DISPLAY_NAME_LEN} characters"
                );
            }
        }

        Ok(())
    }

    /// Sets a value by dotted key (e.g., "ui.theme_mode").
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "ui.theme_mode" | "theme" => self.ui.theme_mode = value.parse()?,
            "ui.show_help_on_startup" => {
                self.ui.show_help_on_startup = value
                    .parse()
                    .context(format!("Expected true or false, got '{value}'"))?;
            }
            "profile.display_name" => self.profile.display_name = non_empty(value),
            "profile.sun_sign" => self.profile.sun_sign = non_empty(value),
            _ => anyhow::bail!(
                "Unknown configuration key '{key}'. Known keys: {}",
                Self::KEYS.join(", ")
            ),
        }

        self.validate()
    }

    /// Keys accepted by [`Config::set_value`].
    pub const KEYS: [&'static str; 4] = [
        "ui.theme_mode",
        "ui.show_help_on_startup",
        "profile.display_name",
        "profile.sun_sign",
    ];
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
