//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include pen defaults,
//! theme colors, canvas size and theme-toggle policy, export naming, and the status bar.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, StatusPosition, ThemeTogglePolicy};
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, StatusBarStyle, ThemeConfig, UiConfig};

use crate::input::tool::{MAX_PEN_WIDTH, MIN_PEN_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "crimson"
/// default_width = 5
///
/// [theme]
/// default_theme = "dark"
///
/// [canvas]
/// width = 1280
/// height = 720
/// on_theme_toggle = "keep-strokes"
///
/// [export]
/// directory = "~/Pictures/Sketchpad"
/// filename_template = "sketch_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen defaults (color, width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Theme selection and background colors
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Canvas size and theme-toggle policy
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// PNG export naming
    #[serde(default)]
    pub export: ExportConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by
    /// the default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1 - 20
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    /// - background color channels: 0.0 - 1.0
    pub fn validate_and_clamp(&mut self) {
        // Pen width: 1 - 20
        if !(MIN_PEN_WIDTH..=MAX_PEN_WIDTH).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {}, clamping to {}-{} range",
                self.drawing.default_width,
                MIN_PEN_WIDTH,
                MAX_PEN_WIDTH
            );
            self.drawing.default_width = self
                .drawing
                .default_width
                .clamp(MIN_PEN_WIDTH, MAX_PEN_WIDTH);
        }

        // Canvas size: 16 - 8192
        for (label, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(16..=8192).contains(&*value) {
                log::warn!("Invalid canvas {} {}, clamping to 16-8192 range", label, value);
                *value = (*value).clamp(16, 8192);
            }
        }

        // Validate theme name
        if !matches!(
            self.theme.default_theme.to_lowercase().as_str(),
            "light" | "dark"
        ) {
            log::warn!(
                "Invalid default_theme '{}', falling back to 'light'",
                self.theme.default_theme
            );
            self.theme.default_theme = "light".to_string();
        }

        // Validate background RGB values (0.0-1.0)
        for (label, rgb) in [
            ("light_background", &mut self.theme.light_background),
            ("dark_background", &mut self.theme.dark_background),
        ] {
            for (i, channel) in rgb.iter_mut().enumerate() {
                if !(0.0..=1.0).contains(&*channel) {
                    log::warn!(
                        "Invalid {}[{}] = {:.3}, clamping to 0.0-1.0",
                        label,
                        i,
                        channel
                    );
                    *channel = channel.clamp(0.0, 1.0);
                }
            }
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty export filename_template, using default");
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
