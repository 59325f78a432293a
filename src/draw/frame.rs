//! Frame container for the committed segments of a drawing session.

use super::segment::Segment;
use serde::{Deserialize, Serialize};

/// Persisted draw list of the canvas.
///
/// Segments are only ever appended or cleared as a whole; individual
/// segments are never edited once committed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    /// All segments in draw order (first = bottom layer, last = top layer)
    segments: Vec<Segment>,
}

impl Frame {
    /// Creates a new empty frame with no segments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all segments from the frame, clearing the canvas.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Appends a committed segment (drawn on top of existing segments).
    pub fn commit(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Committed segments in draw order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Most recently committed segment, if any.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{CapStyle, Color, Point};

    fn segment(x: f64) -> Segment {
        Segment {
            from: Point::new(0.0, 0.0),
            to: Point::new(x, 0.0),
            color: Color::new(1.0, 0.0, 0.0, 1.0),
            width: 2,
            cap: CapStyle::Round,
        }
    }

    #[test]
    fn commit_preserves_draw_order() {
        let mut frame = Frame::new();
        frame.commit(segment(1.0));
        frame.commit(segment(2.0));

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.segments()[0].to.x, 1.0);
        assert_eq!(frame.last().map(|s| s.to.x), Some(2.0));
    }

    #[test]
    fn clear_removes_everything() {
        let mut frame = Frame::new();
        frame.commit(segment(1.0));
        frame.clear();
        assert!(frame.is_empty());
        assert!(frame.last().is_none());
    }
}
