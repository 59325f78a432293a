//! Input handling and tool state machine.
//!
//! This module turns host pointer events and tool actions into committed
//! segments. It maintains the tool state (mode, pen color, width, theme),
//! the pointer speed tracker, the live preview indicator, and the stroke
//! state machine of a drawing session.

pub mod events;
pub mod kinematics;
pub mod preview;
pub mod state;
pub mod theme;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerSample, SketchEvent, ToolAction};
pub use kinematics::KinematicState;
pub use preview::LivePreview;
pub use state::{ExportRequest, SketchSession, StrokeState};
pub use theme::{Theme, ThemeColors};
pub use tool::{ToolMode, ToolState, constrain_pen_width};
