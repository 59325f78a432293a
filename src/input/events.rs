//! Event types delivered by the host UI layer.

use crate::draw::{PenColor, Point};
use std::path::PathBuf;

/// One pointer position with the time it was observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Canvas X coordinate
    pub x: f64,
    /// Canvas Y coordinate
    pub y: f64,
    /// Host timestamp in milliseconds (monotonic order is not assumed)
    pub timestamp_ms: u64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, timestamp_ms: u64) -> Self {
        Self { x, y, timestamp_ms }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Explicit user tool actions (palette, eraser button, width slider, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum ToolAction {
    /// Pick a pen color; always returns to draw mode
    SetColor(PenColor),
    /// Flip between draw and erase
    ToggleEraser,
    /// New width-control value, already constrained to 1-20
    SetPenWidth(u32),
    /// Flip between light and dark theme
    ToggleTheme,
    /// Remove every committed segment
    Clear,
    /// Export the canvas; `None` means the save dialog was cancelled
    Save(Option<PathBuf>),
}

/// Tagged union of everything a session reacts to, processed in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchEvent {
    /// Primary button pressed
    Press(PointerSample),
    /// Pointer moved (a stroke is extended only while pressed)
    Move(PointerSample),
    /// Primary button released
    Release(PointerSample),
    /// Pointer moved with the button up (tracks position only)
    Hover(PointerSample),
    /// Tool change from the controls
    Tool(ToolAction),
}

impl From<ToolAction> for SketchEvent {
    fn from(action: ToolAction) -> Self {
        SketchEvent::Tool(action)
    }
}
