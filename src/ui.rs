/// UI rendering: status line text and the on-canvas status bar
use crate::config::{StatusBarStyle, StatusPosition};
use crate::draw::Point;
use crate::input::{SketchSession, ToolState};

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Background rectangle X offset
const STATUS_BG_OFFSET_X: f64 = 5.0;
/// Background rectangle Y offset
const STATUS_BG_OFFSET_Y: f64 = 3.0;
/// Background rectangle width padding
const STATUS_BG_WIDTH_PAD: f64 = 10.0;
/// Background rectangle height padding
const STATUS_BG_HEIGHT_PAD: f64 = 8.0;
/// Gap between the color dot and the text
const STATUS_DOT_GAP: f64 = 6.0;

/// Derives the human-readable status line.
///
/// Contains the mode, the pen color name ("Custom" outside the palette) and
/// hex code, the pen width, the speed with two decimals and the last pointer
/// coordinates.
pub fn status_line(tool: &ToolState, speed_px_per_sec: f64, pointer: Point) -> String {
    let pen = tool.pen_color();
    format!(
        "{} Mode | Color: {} ({}) | Width: {} | Speed: {:.2} px/s | Pointer: {}, {}",
        tool.mode(),
        pen.name(),
        pen.hex(),
        tool.pen_width(),
        speed_px_per_sec,
        pointer.x,
        pointer.y
    )
}

/// Render status bar showing the session's status line and a pen color dot
pub fn render_status_bar(
    ctx: &cairo::Context,
    session: &SketchSession,
    position: StatusPosition,
    style: &StatusBarStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let status_text = session.status_line();
    let color = session.tool().pen_color().color();

    ctx.save().ok();
    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    // Measure text
    let extents = match ctx.text_extents(status_text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!(
                "Failed to measure status bar text: {}, skipping status bar",
                e
            );
            ctx.restore().ok();
            return; // Gracefully skip rendering if font measurement fails
        }
    };
    let dot_space = style.dot_radius * 2.0 + STATUS_DOT_GAP;
    let text_width = extents.width() + dot_space;
    let text_height = extents.height();

    let padding = style.padding;
    let (x, y) = match position {
        StatusPosition::TopLeft => (padding, padding + text_height),
        StatusPosition::TopRight => (
            screen_width as f64 - text_width - padding,
            padding + text_height,
        ),
        StatusPosition::BottomLeft => (padding, screen_height as f64 - padding),
        StatusPosition::BottomRight => (
            screen_width as f64 - text_width - padding,
            screen_height as f64 - padding,
        ),
    };

    // Draw semi-transparent background
    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(
        x - STATUS_BG_OFFSET_X,
        y - text_height - STATUS_BG_OFFSET_Y,
        text_width + STATUS_BG_WIDTH_PAD,
        text_height + STATUS_BG_HEIGHT_PAD,
    );
    let _ = ctx.fill();

    // Draw pen color indicator dot
    let dot_x = x + style.dot_radius;
    let dot_y = y - text_height / 2.0;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.arc(
        dot_x,
        dot_y,
        style.dot_radius,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    let _ = ctx.fill();

    // Draw text
    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x + dot_space, y);
    let _ = ctx.show_text(status_text);
    ctx.restore().ok();
}
