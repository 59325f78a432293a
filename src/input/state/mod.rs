mod actions;
mod core;
mod pointer;
#[cfg(test)]
mod tests;

pub use self::core::{ExportRequest, SketchSession, StrokeState};
pub use pointer::stroke_segment;
