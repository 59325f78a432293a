//! Configuration type definitions.

use super::enums::{ColorSpec, StatusPosition, ThemeTogglePolicy};
use crate::draw::Color;
use crate::input::{Theme, ThemeColors};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen when a session starts. Users change these values at
/// runtime through the palette and the width control.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - a palette name (black, red, crimson, ...), a hex code
    /// like `"#FF0000"`, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default pen width in pixels (valid range: 1 - 20)
    #[serde(default = "default_width")]
    pub default_width: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
        }
    }
}

/// Theme settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ThemeConfig {
    /// Theme on startup: "light" or "dark"
    #[serde(default = "default_theme")]
    pub default_theme: String,

    /// Light theme background RGB (0.0-1.0 range)
    #[serde(default = "default_light_background")]
    pub light_background: [f64; 3],

    /// Dark theme background RGB (0.0-1.0 range)
    #[serde(default = "default_dark_background")]
    pub dark_background: [f64; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
            light_background: default_light_background(),
            dark_background: default_dark_background(),
        }
    }
}

impl ThemeConfig {
    /// Parsed startup theme (invalid names were already replaced during validation).
    pub fn initial_theme(&self) -> Theme {
        self.default_theme.parse().unwrap_or_default()
    }

    /// Background colors for both themes.
    pub fn colors(&self) -> ThemeColors {
        let [lr, lg, lb] = self.light_background;
        let [dr, dg, db] = self.dark_background;
        ThemeColors {
            light: Color::new(lr, lg, lb, 1.0),
            dark: Color::new(dr, dg, db, 1.0),
        }
    }
}

/// Canvas settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// What a theme toggle does to committed segments ("keep-strokes" or "clear-canvas")
    #[serde(default = "default_theme_toggle_policy")]
    pub on_theme_toggle: ThemeTogglePolicy,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            on_theme_toggle: default_theme_toggle_policy(),
        }
    }
}

/// PNG export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for automatically named exports (`~` is expanded)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename template (chrono format specifiers, without extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: default_filename_template(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Draw the status line onto rendered canvases
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_bar_position: StatusPosition,

    /// Status bar styling options
    #[serde(default)]
    pub status_bar_style: StatusBarStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_bar_position: default_status_position(),
            status_bar_style: StatusBarStyle::default(),
        }
    }
}

/// Status bar styling configuration.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StatusBarStyle {
    /// Font size for status bar text
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,

    /// Padding around status bar text
    #[serde(default = "default_status_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_text_color")]
    pub text_color: [f64; 4],

    /// Color indicator dot radius
    #[serde(default = "default_status_dot_radius")]
    pub dot_radius: f64,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            font_size: default_status_font_size(),
            padding: default_status_padding(),
            bg_color: default_status_bg_color(),
            text_color: default_status_text_color(),
            dot_radius: default_status_dot_radius(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_width() -> u32 {
    3
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_light_background() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

fn default_dark_background() -> [f64; 3] {
    // #2B2B2B
    [43.0 / 255.0, 43.0 / 255.0, 43.0 / 255.0]
}

fn default_canvas_width() -> u32 {
    1000
}

fn default_canvas_height() -> u32 {
    600
}

fn default_theme_toggle_policy() -> ThemeTogglePolicy {
    ThemeTogglePolicy::ClearCanvas
}

fn default_export_directory() -> String {
    "~/Pictures/Sketchpad".to_string()
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}

fn default_show_status() -> bool {
    false
}

fn default_status_position() -> StatusPosition {
    StatusPosition::BottomLeft
}

fn default_status_font_size() -> f64 {
    14.0
}

fn default_status_padding() -> f64 {
    10.0
}

fn default_status_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.75]
}

fn default_status_text_color() -> [f64; 4] {
    [0.85, 0.85, 0.85, 1.0]
}

fn default_status_dot_radius() -> f64 {
    5.0
}
