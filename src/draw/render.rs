//! Cairo-based rendering functions for segments and the preview indicator.

use super::color::Color;
use super::segment::{CapStyle, PreviewSegment, Segment};

/// Fills the whole canvas with the theme background color.
///
/// Should be called after clearing the canvas but before rendering segments.
pub fn render_background(ctx: &cairo::Context, background: Color) {
    ctx.set_source_rgba(background.r, background.g, background.b, background.a);
    ctx.set_operator(cairo::Operator::Source);
    let _ = ctx.paint(); // Ignore errors - a failed paint only leaves the old pixels
    ctx.set_operator(cairo::Operator::Over);
}

/// Renders all committed segments in draw order (first = bottom layer).
pub fn render_segments(ctx: &cairo::Context, segments: &[Segment]) {
    for segment in segments {
        render_segment(ctx, segment);
    }
}

/// Renders one committed segment as a straight stroked line.
pub fn render_segment(ctx: &cairo::Context, segment: &Segment) {
    let Segment {
        from,
        to,
        color,
        width,
        cap,
    } = segment;

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(f64::from(*width));
    ctx.set_line_cap(match cap {
        CapStyle::Round => cairo::LineCap::Round,
    });
    ctx.set_dash(&[], 0.0);

    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let _ = ctx.stroke();
}

/// Renders the dashed, thin preview indicator.
///
/// Context state is saved and restored so the dash pattern does not leak
/// into later strokes.
pub fn render_preview(ctx: &cairo::Context, preview: &PreviewSegment) {
    let color = preview.color;

    ctx.save().ok();
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(PreviewSegment::WIDTH);
    ctx.set_line_cap(cairo::LineCap::Butt);
    ctx.set_dash(&PreviewSegment::DASH, 0.0);
    ctx.move_to(preview.from.x, preview.from.y);
    ctx.line_to(preview.to.x, preview.to.y);
    let _ = ctx.stroke();
    ctx.restore().ok();
}

/// Paints a complete canvas: background, committed segments, then the preview.
pub fn render_canvas(
    ctx: &cairo::Context,
    background: Color,
    segments: &[Segment],
    preview: Option<&PreviewSegment>,
) {
    render_background(ctx, background);
    render_segments(ctx, segments);
    if let Some(preview) = preview {
        render_preview(ctx, preview);
    }
}
