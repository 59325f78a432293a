use crate::draw::{CapStyle, Point, Segment};
use crate::input::{PointerSample, ToolState};
use log::debug;

use super::{SketchSession, StrokeState};

/// Builds the segment a pointer move produces, if any.
///
/// Without a previous point the move only anchors the stroke. The color is
/// resolved now: the pen color while drawing, the current background while
/// erasing. The width is read from the tool state on every call, so width
/// changes apply mid-stroke.
pub fn stroke_segment(previous: Option<Point>, next: Point, tool: &ToolState) -> Option<Segment> {
    let from = previous?;
    Some(Segment {
        from,
        to: next,
        color: tool.stroke_color(),
        width: tool.pen_width(),
        cap: CapStyle::Round,
    })
}

impl SketchSession {
    /// Processes a pointer button press.
    ///
    /// Anchors a new stroke at the press position. No segment is produced
    /// and the speed stays at zero until the next move.
    pub fn on_pointer_press(&mut self, sample: PointerSample) {
        if self.is_drawing() {
            debug!("Press without release; starting a new stroke");
        }

        self.kinematics.reset();
        if self.preview.clear().is_some() {
            self.needs_redraw = true;
        }
        self.kinematics.on_sample(&sample);

        let origin = sample.position();
        self.pointer = origin;
        self.stroke = StrokeState::Drawing {
            origin,
            segments: 0,
        };
        self.refresh_status();
    }

    /// Processes pointer motion while the button is held.
    ///
    /// Returns the committed segment. A move that arrives with no anchor
    /// (no preceding press) becomes the anchor of a new stroke.
    pub fn on_pointer_move(&mut self, sample: PointerSample) -> Option<Segment> {
        let position = sample.position();
        self.pointer = position;

        if !self.is_drawing() {
            debug!("Move without anchor at ({}, {}); anchoring stroke", position.x, position.y);
            self.stroke = StrokeState::Drawing {
                origin: position,
                segments: 0,
            };
        }

        let previous = self.kinematics.last_position();
        self.kinematics.on_sample(&sample);

        let segment = stroke_segment(previous, position, &self.tool);
        if let Some(segment) = segment {
            self.frame.commit(segment);
            if let StrokeState::Drawing { segments, .. } = &mut self.stroke {
                *segments += 1;
            }
            self.preview
                .on_move(segment.from, position, self.tool.pen_color().color());
            self.needs_redraw = true;
        }

        self.refresh_status();
        segment
    }

    /// Processes pointer button release.
    ///
    /// Ends the stroke, resets the speed tracker and removes the preview.
    /// Tool state is kept for the next stroke.
    pub fn on_pointer_release(&mut self, sample: PointerSample) {
        self.pointer = sample.position();

        if let StrokeState::Drawing { origin, segments } = self.stroke {
            debug!(
                "Stroke from ({}, {}) finished with {} segment(s)",
                origin.x, origin.y, segments
            );
        }

        self.stroke = StrokeState::Idle;
        self.kinematics.reset();
        if self.preview.clear().is_some() {
            self.needs_redraw = true;
        }
        self.refresh_status();
    }

    /// Tracks pointer motion with the button up.
    pub fn on_pointer_hover(&mut self, sample: PointerSample) {
        self.pointer = sample.position();
        self.refresh_status();
    }
}
