//! Fixed 20-entry pen palette and the pen color selection type.

use super::color::{Color, ColorParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named colors offered by the palette selector, keyed by hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Gray,
    Silver,
    White,
    Maroon,
    Red,
    Olive,
    Yellow,
    Green,
    Lime,
    Teal,
    Cyan,
    Navy,
    Blue,
    Purple,
    Magenta,
    Brown,
    Orange,
    Wheat,
    Crimson,
}

impl NamedColor {
    /// All palette entries in display order.
    pub const ALL: [NamedColor; 20] = [
        NamedColor::Black,
        NamedColor::Gray,
        NamedColor::Silver,
        NamedColor::White,
        NamedColor::Maroon,
        NamedColor::Red,
        NamedColor::Olive,
        NamedColor::Yellow,
        NamedColor::Green,
        NamedColor::Lime,
        NamedColor::Teal,
        NamedColor::Cyan,
        NamedColor::Navy,
        NamedColor::Blue,
        NamedColor::Purple,
        NamedColor::Magenta,
        NamedColor::Brown,
        NamedColor::Orange,
        NamedColor::Wheat,
        NamedColor::Crimson,
    ];

    /// Channel values of the palette entry.
    pub const fn rgb8(self) -> [u8; 3] {
        match self {
            NamedColor::Black => [0x00, 0x00, 0x00],
            NamedColor::Gray => [0x80, 0x80, 0x80],
            NamedColor::Silver => [0xC0, 0xC0, 0xC0],
            NamedColor::White => [0xFF, 0xFF, 0xFF],
            NamedColor::Maroon => [0x80, 0x00, 0x00],
            NamedColor::Red => [0xFF, 0x00, 0x00],
            NamedColor::Olive => [0x80, 0x80, 0x00],
            NamedColor::Yellow => [0xFF, 0xFF, 0x00],
            NamedColor::Green => [0x00, 0x80, 0x00],
            NamedColor::Lime => [0x00, 0xFF, 0x00],
            NamedColor::Teal => [0x00, 0x80, 0x80],
            NamedColor::Cyan => [0x00, 0xFF, 0xFF],
            NamedColor::Navy => [0x00, 0x00, 0x80],
            NamedColor::Blue => [0x00, 0x00, 0xFF],
            NamedColor::Purple => [0x80, 0x00, 0x80],
            NamedColor::Magenta => [0xFF, 0x00, 0xFF],
            NamedColor::Brown => [0xA5, 0x2A, 0x2A],
            NamedColor::Orange => [0xFF, 0xA5, 0x00],
            NamedColor::Wheat => [0xF5, 0xDE, 0xB3],
            NamedColor::Crimson => [0xDC, 0x14, 0x3C],
        }
    }

    /// Human-readable name shown in the status line.
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "Black",
            NamedColor::Gray => "Gray",
            NamedColor::Silver => "Silver",
            NamedColor::White => "White",
            NamedColor::Maroon => "Maroon",
            NamedColor::Red => "Red",
            NamedColor::Olive => "Olive",
            NamedColor::Yellow => "Yellow",
            NamedColor::Green => "Green",
            NamedColor::Lime => "Lime",
            NamedColor::Teal => "Teal",
            NamedColor::Cyan => "Cyan",
            NamedColor::Navy => "Navy",
            NamedColor::Blue => "Blue",
            NamedColor::Purple => "Purple",
            NamedColor::Magenta => "Magenta",
            NamedColor::Brown => "Brown",
            NamedColor::Orange => "Orange",
            NamedColor::Wheat => "Wheat",
            NamedColor::Crimson => "Crimson",
        }
    }

    pub fn color(self) -> Color {
        let [r, g, b] = self.rgb8();
        Color::from_rgb8(r, g, b)
    }

    /// Finds the palette entry with exactly these channel values.
    pub fn from_rgb8(rgb: [u8; 3]) -> Option<Self> {
        Self::ALL.into_iter().find(|named| named.rgb8() == rgb)
    }

    /// Case-insensitive lookup by palette name (e.g. `"crimson"`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|named| named.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Pen color selection: a palette entry or an arbitrary custom color.
///
/// Custom colors come from the color picker escape hatch and are labelled
/// "Custom" in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PenColor {
    Named(NamedColor),
    Custom(Color),
}

impl PenColor {
    /// Resolves a concrete color to its palette entry when one matches exactly.
    pub fn from_color(color: Color) -> Self {
        match NamedColor::from_rgb8(color.to_rgb8()) {
            Some(named) => PenColor::Named(named),
            None => PenColor::Custom(color),
        }
    }

    /// Parses `#RRGGBB`, resolving palette entries case-insensitively.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        Color::from_hex(hex).map(Self::from_color)
    }

    pub fn color(&self) -> Color {
        match self {
            PenColor::Named(named) => named.color(),
            PenColor::Custom(color) => *color,
        }
    }

    /// Palette name, or `"Custom"` for colors outside the palette.
    pub fn name(&self) -> &'static str {
        match self {
            PenColor::Named(named) => named.name(),
            PenColor::Custom(_) => "Custom",
        }
    }

    /// Uppercase `#RRGGBB` code.
    pub fn hex(&self) -> String {
        self.color().to_hex()
    }
}

impl Default for PenColor {
    fn default() -> Self {
        PenColor::Named(NamedColor::Black)
    }
}

impl From<NamedColor> for PenColor {
    fn from(named: NamedColor) -> Self {
        PenColor::Named(named)
    }
}

impl FromStr for PenColor {
    type Err = ColorParseError;

    /// Accepts either a palette name or a hex code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match NamedColor::from_name(s) {
            Some(named) => Ok(PenColor::Named(named)),
            None => Self::from_hex(s),
        }
    }
}

impl TryFrom<String> for PenColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PenColor> for String {
    fn from(color: PenColor) -> Self {
        color.hex()
    }
}

impl fmt::Display for PenColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.hex())
    }
}
