//! Rendering primitives and segment definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the sketch surface:
//! - [`Color`]: RGBA color representation with hex conversion
//! - [`PenColor`] / [`NamedColor`]: the fixed 20-entry palette plus custom colors
//! - [`Segment`]: one committed, round-capped straight line
//! - [`Frame`]: the persisted list of committed segments
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod frame;
pub mod palette;
pub mod render;
pub mod segment;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};
pub use frame::Frame;
pub use palette::{NamedColor, PenColor};
pub use render::{render_canvas, render_preview, render_segment, render_segments};
pub use segment::{CapStyle, Point, PreviewSegment, Segment};
