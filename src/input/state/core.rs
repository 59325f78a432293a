//! Drawing session state and stroke state machine.

use crate::config::{Config, ThemeTogglePolicy};
use crate::draw::{Frame, Point, PreviewSegment};
use crate::input::{KinematicState, LivePreview, ToolState};
use crate::ui;
use std::path::PathBuf;

/// Stroke state machine.
///
/// A stroke lasts from a press to its matching release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// Pointer button up - moves only track the pointer
    Idle,
    /// Pointer button held down
    Drawing {
        /// Where the stroke was anchored
        origin: Point,
        /// Segments committed by this stroke so far
        segments: usize,
    },
}

/// A save request waiting for the export collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Destination chosen by the user; `None` when the dialog was cancelled
    pub path: Option<PathBuf>,
}

/// One drawing session: tool state, kinematics, preview and the committed frame.
///
/// All mutation goes through [`SketchSession::handle`] (or the per-event
/// methods it dispatches to) on a single thread, in arrival order.
pub struct SketchSession {
    /// Committed segments (the canvas draw list)
    pub(super) frame: Frame,
    /// Mode, pen and theme
    pub(super) tool: ToolState,
    /// Speed and last sample of the active stroke
    pub(super) kinematics: KinematicState,
    /// Ephemeral next-segment indicator
    pub(super) preview: LivePreview,
    /// Current stroke state
    pub(super) stroke: StrokeState,
    /// Last known pointer position (pressed or not)
    pub(super) pointer: Point,
    /// What theme toggles do to committed segments
    pub(super) theme_policy: ThemeTogglePolicy,
    /// Current status line
    pub(super) status: String,
    /// Whether the canvas needs to be redrawn
    pub needs_redraw: bool,
    /// Save request to be serviced by the host
    pending_export: Option<ExportRequest>,
}

impl SketchSession {
    /// Creates a session with an empty canvas.
    ///
    /// The theme-toggle policy has no implicit default here; callers pick one.
    pub fn new(tool: ToolState, theme_policy: ThemeTogglePolicy) -> Self {
        let mut session = Self {
            frame: Frame::new(),
            tool,
            kinematics: KinematicState::new(),
            preview: LivePreview::new(),
            stroke: StrokeState::Idle,
            pointer: Point::default(),
            theme_policy,
            status: String::new(),
            needs_redraw: true,
            pending_export: None,
        };
        session.refresh_status();
        session
    }

    /// Creates a session from the configured pen, theme and policy.
    pub fn from_config(config: &Config) -> Self {
        let tool = ToolState::new(
            config.drawing.default_color.to_pen_color(),
            config.drawing.default_width,
            config.theme.initial_theme(),
            config.theme.colors(),
        );
        Self::new(tool, config.canvas.on_theme_toggle)
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn kinematics(&self) -> &KinematicState {
        &self.kinematics
    }

    /// Instantaneous speed in pixels per second.
    pub fn speed(&self) -> f64 {
        self.kinematics.speed()
    }

    pub fn preview(&self) -> Option<&PreviewSegment> {
        self.preview.current()
    }

    pub fn stroke_state(&self) -> StrokeState {
        self.stroke
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.stroke, StrokeState::Drawing { .. })
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn theme_policy(&self) -> ThemeTogglePolicy {
        self.theme_policy
    }

    pub fn set_theme_policy(&mut self, policy: ThemeTogglePolicy) {
        self.theme_policy = policy;
    }

    /// Single-line summary of the current state for the status sink.
    pub fn status_line(&self) -> &str {
        &self.status
    }

    /// Recomputes the status line from the current state.
    pub(super) fn refresh_status(&mut self) {
        self.status = ui::status_line(&self.tool, self.kinematics.speed(), self.pointer);
    }

    /// Takes and clears any pending save request.
    ///
    /// Called by the host, which owns the export collaborator.
    pub fn take_pending_export(&mut self) -> Option<ExportRequest> {
        self.pending_export.take()
    }

    /// Stores a save request for retrieval by the host.
    pub(super) fn set_pending_export(&mut self, request: ExportRequest) {
        self.pending_export = Some(request);
    }
}
