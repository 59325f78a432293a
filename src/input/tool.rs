//! Tool mode and the mutable tool state of a drawing session.

use super::theme::{Theme, ThemeColors};
use crate::draw::{Color, PenColor};
use std::fmt;

/// Smallest pen width the width control offers.
pub const MIN_PEN_WIDTH: u32 = 1;
/// Largest pen width the width control offers.
pub const MAX_PEN_WIDTH: u32 = 20;

/// Current tool behavior.
///
/// Selecting a color always returns to [`ToolMode::Draw`]; the eraser
/// toggle flips between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Paints with the pen color
    #[default]
    Draw,
    /// Paints with the current background color
    Erase,
}

impl ToolMode {
    pub fn toggled(self) -> Self {
        match self {
            ToolMode::Draw => ToolMode::Erase,
            ToolMode::Erase => ToolMode::Draw,
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolMode::Draw => write!(f, "Draw"),
            ToolMode::Erase => write!(f, "Erase"),
        }
    }
}

/// Constrains a raw width-control reading to the supported range.
///
/// [`ToolState::set_pen_width`] trusts its input; hosts call this first.
pub fn constrain_pen_width(raw: i64) -> u32 {
    let clamped = raw.clamp(i64::from(MIN_PEN_WIDTH), i64::from(MAX_PEN_WIDTH));
    u32::try_from(clamped).unwrap_or(MIN_PEN_WIDTH)
}

/// Mode, pen and theme settings for one drawing session.
///
/// The background color has no setter: it is always derived from the
/// current theme.
#[derive(Debug, Clone)]
pub struct ToolState {
    mode: ToolMode,
    pen_color: PenColor,
    pen_width: u32,
    theme: Theme,
    theme_colors: ThemeColors,
}

impl ToolState {
    /// Creates a tool state in draw mode.
    pub fn new(pen_color: PenColor, pen_width: u32, theme: Theme, theme_colors: ThemeColors) -> Self {
        Self {
            mode: ToolMode::Draw,
            pen_color,
            pen_width,
            theme,
            theme_colors,
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn pen_color(&self) -> PenColor {
        self.pen_color
    }

    pub fn pen_width(&self) -> u32 {
        self.pen_width
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Canvas background for the current theme.
    pub fn background_color(&self) -> Color {
        self.theme.background_color(&self.theme_colors)
    }

    /// Color a segment committed right now would get.
    pub fn stroke_color(&self) -> Color {
        match self.mode {
            ToolMode::Draw => self.pen_color.color(),
            ToolMode::Erase => self.background_color(),
        }
    }

    /// Selects a pen color. Always leaves erase mode.
    pub fn set_color(&mut self, color: PenColor) {
        self.pen_color = color;
        self.mode = ToolMode::Draw;
        log::debug!("Pen color set to {}", color);
    }

    /// Flips between draw and erase mode.
    pub fn toggle_eraser(&mut self) -> ToolMode {
        self.mode = self.mode.toggled();
        log::debug!("Tool mode is now {}", self.mode);
        self.mode
    }

    /// Stores the pen width as given; range checks belong to the width control.
    pub fn set_pen_width(&mut self, width: u32) {
        self.pen_width = width;
        log::debug!("Pen width set to {}px", width);
    }

    /// Flips the theme. The pen color is left untouched.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        log::debug!(
            "Theme is now {:?} (background {})",
            self.theme,
            self.background_color().to_hex()
        );
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::NamedColor;

    fn tool_state() -> ToolState {
        ToolState::new(
            PenColor::Named(NamedColor::Blue),
            3,
            Theme::Light,
            ThemeColors::default(),
        )
    }

    #[test]
    fn double_toggle_restores_mode() {
        let mut tool = tool_state();
        let before = tool.mode();
        tool.toggle_eraser();
        assert_eq!(tool.mode(), ToolMode::Erase);
        tool.toggle_eraser();
        assert_eq!(tool.mode(), before);
    }

    #[test]
    fn set_color_leaves_erase_mode() {
        let mut tool = tool_state();
        tool.toggle_eraser();
        tool.set_color(PenColor::Named(NamedColor::Red));
        assert_eq!(tool.mode(), ToolMode::Draw);
        assert_eq!(tool.stroke_color(), NamedColor::Red.color());
    }

    #[test]
    fn erase_uses_background_not_pen() {
        let mut tool = tool_state();
        tool.toggle_eraser();
        assert_eq!(tool.stroke_color(), tool.background_color());
        tool.toggle_theme();
        assert_eq!(tool.stroke_color(), ThemeColors::default().dark);
    }

    #[test]
    fn theme_toggle_keeps_pen_color() {
        let mut tool = tool_state();
        let pen = tool.pen_color();
        let light = tool.background_color();
        tool.toggle_theme();
        assert_ne!(tool.background_color(), light);
        assert_eq!(tool.pen_color(), pen);
    }

    #[test]
    fn width_control_constrains_range() {
        assert_eq!(constrain_pen_width(0), MIN_PEN_WIDTH);
        assert_eq!(constrain_pen_width(7), 7);
        assert_eq!(constrain_pen_width(99), MAX_PEN_WIDTH);
    }
}
