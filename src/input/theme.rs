//! Light/dark theme selection.

use crate::draw::{Color, color::WHITE};

/// Background (and therefore erase) colors for each theme.
///
/// Fixed for the lifetime of a session, so the background stays a pure
/// function of the theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// Background for [`Theme::Light`]
    pub light: Color,
    /// Background for [`Theme::Dark`]
    pub dark: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            light: WHITE,
            dark: Color::from_rgb8(0x2b, 0x2b, 0x2b),
        }
    }
}

/// Canvas theme, toggled as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// White background (default)
    #[default]
    Light,
    /// Dark neutral background
    Dark,
}

impl Theme {
    /// Returns the background color for this theme.
    pub fn background_color(&self, colors: &ThemeColors) -> Color {
        match self {
            Self::Light => colors.light,
            Self::Dark => colors.dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}
