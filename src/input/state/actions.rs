use crate::config::ThemeTogglePolicy;
use crate::draw::{PenColor, Segment};
use crate::input::{SketchEvent, ToolAction, ToolMode};
use log::{debug, info};
use std::path::PathBuf;

use super::{ExportRequest, SketchSession};

impl SketchSession {
    /// Dispatches one event. Returns the segment it committed, if any.
    ///
    /// Events must be passed in arrival order; every handler runs to
    /// completion before the next event is looked at.
    pub fn handle(&mut self, event: SketchEvent) -> Option<Segment> {
        match event {
            SketchEvent::Press(sample) => {
                self.on_pointer_press(sample);
                None
            }
            SketchEvent::Move(sample) => self.on_pointer_move(sample),
            SketchEvent::Release(sample) => {
                self.on_pointer_release(sample);
                None
            }
            SketchEvent::Hover(sample) => {
                self.on_pointer_hover(sample);
                None
            }
            SketchEvent::Tool(action) => {
                self.apply_tool_action(action);
                None
            }
        }
    }

    /// Applies a tool action from the controls.
    pub fn apply_tool_action(&mut self, action: ToolAction) {
        match action {
            ToolAction::SetColor(color) => self.set_color(color),
            ToolAction::ToggleEraser => {
                self.toggle_eraser();
            }
            ToolAction::SetPenWidth(width) => self.set_pen_width(width),
            ToolAction::ToggleTheme => self.toggle_theme(),
            ToolAction::Clear => self.clear_canvas(),
            ToolAction::Save(path) => self.request_export(path),
        }
    }

    /// Selects a pen color and returns to draw mode.
    pub fn set_color(&mut self, color: PenColor) {
        self.tool.set_color(color);
        self.needs_redraw = true;
        self.refresh_status();
    }

    /// Flips between draw and erase mode.
    pub fn toggle_eraser(&mut self) -> ToolMode {
        let mode = self.tool.toggle_eraser();
        self.refresh_status();
        mode
    }

    /// Applies a new width-control value; affects the next segment, even mid-stroke.
    pub fn set_pen_width(&mut self, width: u32) {
        self.tool.set_pen_width(width);
        self.refresh_status();
    }

    /// Flips the theme and applies the configured canvas policy.
    ///
    /// With [`ThemeTogglePolicy::KeepStrokes`] segments committed earlier keep
    /// the color they had, including eraser segments painted with the old
    /// background.
    pub fn toggle_theme(&mut self) {
        let theme = self.tool.toggle_theme();
        match self.theme_policy {
            ThemeTogglePolicy::ClearCanvas => {
                self.frame.clear();
                self.preview.clear();
                debug!("Canvas cleared after switching to {:?} theme", theme);
            }
            ThemeTogglePolicy::KeepStrokes => {}
        }
        self.needs_redraw = true;
        self.refresh_status();
    }

    /// Removes every committed segment and the live preview. Tool state is unchanged.
    pub fn clear_canvas(&mut self) {
        let removed = self.frame.len();
        self.frame.clear();
        self.preview.clear();
        self.needs_redraw = true;
        self.refresh_status();
        info!("Cleared canvas ({} segment(s) removed)", removed);
    }

    /// Records a save request for the host's export collaborator.
    pub fn request_export(&mut self, path: Option<PathBuf>) {
        self.set_pending_export(ExportRequest { path });
    }
}
