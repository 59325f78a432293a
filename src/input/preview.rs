//! Live preview of the next segment.

use crate::draw::{Color, Point, PreviewSegment};

/// Holds at most one ephemeral preview indicator.
///
/// The indicator is never committed to the frame; each move replaces it and
/// releasing the pointer removes it.
#[derive(Debug, Default)]
pub struct LivePreview {
    current: Option<PreviewSegment>,
}

impl LivePreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the indicator, returning the one that was removed.
    pub fn on_move(
        &mut self,
        last_committed: Point,
        current: Point,
        pen_color: Color,
    ) -> Option<PreviewSegment> {
        self.current.replace(PreviewSegment {
            from: last_committed,
            to: current,
            color: pen_color,
        })
    }

    /// Removes the indicator, returning it if one was shown.
    pub fn clear(&mut self) -> Option<PreviewSegment> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&PreviewSegment> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn each_move_replaces_the_indicator() {
        let mut preview = LivePreview::new();
        assert!(preview
            .on_move(Point::new(0.0, 0.0), Point::new(1.0, 1.0), BLACK)
            .is_none());
        let removed = preview.on_move(Point::new(1.0, 1.0), Point::new(2.0, 2.0), BLACK);
        assert_eq!(removed.map(|p| p.to), Some(Point::new(1.0, 1.0)));
        assert_eq!(preview.current().map(|p| p.to), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn clear_removes_indicator() {
        let mut preview = LivePreview::new();
        preview.on_move(Point::new(0.0, 0.0), Point::new(1.0, 1.0), BLACK);
        assert!(preview.clear().is_some());
        assert!(preview.current().is_none());
        assert!(preview.clear().is_none());
    }
}
