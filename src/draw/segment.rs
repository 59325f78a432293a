//! Stroke primitives: points, committed segments and the preview indicator.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// Canvas position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Line cap used when stroking a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CapStyle {
    /// Round caps, so consecutive segments join without visible gaps
    #[default]
    Round,
}

/// One straight, committed line between two consecutive pointer samples.
///
/// Segments are never mutated after they are committed to a [`Frame`](super::Frame);
/// the color is already resolved against the tool mode at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point (the previous sample)
    pub from: Point,
    /// End point (the new sample)
    pub to: Point,
    /// Stroke color (pen color, or background color when erasing)
    pub color: Color,
    /// Line width in pixels
    pub width: u32,
    /// Line cap style
    pub cap: CapStyle,
}

impl Segment {
    /// Length of the segment in pixels.
    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }
}

/// Ephemeral dashed indicator drawn from the last committed point to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSegment {
    pub from: Point,
    pub to: Point,
    /// Always the pen color, even while erasing
    pub color: Color,
}

impl PreviewSegment {
    /// Preview lines are thin targeting aids.
    pub const WIDTH: f64 = 1.0;
    /// On/off lengths of the dash pattern.
    pub const DASH: [f64; 2] = [2.0, 2.0];
}
