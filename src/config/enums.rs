//! Configuration enum types.

use crate::draw::{Color, NamedColor, PenColor};
use clap::ValueEnum;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status bar position on the canvas.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

/// What happens to already committed segments when the theme is toggled.
///
/// Erased areas are painted with the background of their time, so keeping
/// strokes across a toggle leaves visible eraser marks on the new background.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeTogglePolicy {
    /// Keep every segment with the color it was committed with
    KeepStrokes,
    /// Clear the canvas so no segment mismatches the new background
    ClearCanvas,
}

/// Color specification - a palette name, a hex code, or RGB values.
///
/// # Examples
/// ```toml
/// # Palette name
/// default_color = "crimson"
///
/// # Hex code
/// default_color = "#1E90FF"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (black, red, crimson, ...) or `#RRGGBB`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a pen color.
    ///
    /// Unknown names fall back to black with a warning. Values matching a
    /// palette entry resolve to that entry, anything else is a custom color.
    pub fn to_pen_color(&self) -> PenColor {
        match self {
            ColorSpec::Name(name) => name.parse().unwrap_or_else(|err| {
                warn!("Unknown color '{}' ({}), using black", name, err);
                PenColor::Named(NamedColor::Black)
            }),
            ColorSpec::Rgb([r, g, b]) => PenColor::from_color(Color::from_rgb8(*r, *g, *b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_policy_parses_cli_names() {
        assert_eq!(
            ThemeTogglePolicy::from_str("keep-strokes", false).unwrap(),
            ThemeTogglePolicy::KeepStrokes
        );
        assert_eq!(
            ThemeTogglePolicy::from_str("clear-canvas", false).unwrap(),
            ThemeTogglePolicy::ClearCanvas
        );
        assert!(ThemeTogglePolicy::from_str("repaint", false).is_err());
    }

    #[test]
    fn color_spec_resolves_names_hex_and_rgb() {
        assert_eq!(
            ColorSpec::Name("Teal".into()).to_pen_color(),
            PenColor::Named(NamedColor::Teal)
        );
        assert_eq!(
            ColorSpec::Name("#ffa500".into()).to_pen_color(),
            PenColor::Named(NamedColor::Orange)
        );
        assert_eq!(ColorSpec::Rgb([1, 2, 3]).to_pen_color().name(), "Custom");
    }

    #[test]
    fn unknown_color_name_falls_back_to_black() {
        assert_eq!(
            ColorSpec::Name("ultraviolet".into()).to_pen_color(),
            PenColor::Named(NamedColor::Black)
        );
    }
}
