//! Headless host: replays recorded event scripts against a session.
//!
//! A script is JSON Lines, one event per line. Blank lines and lines starting
//! with `#` are skipped.
//!
//! ```text
//! {"event": "set-color", "color": "#DC143C"}
//! {"event": "press", "x": 0, "y": 0, "t": 0}
//! {"event": "move", "x": 3, "y": 4, "t": 100}
//! {"event": "release", "x": 3, "y": 4, "t": 120}
//! {"event": "save", "path": "sketch.png"}
//! ```

use crate::config::{ExportConfig, UiConfig};
use crate::draw::{ColorParseError, PenColor};
use crate::export::{self, CanvasSize, ExportError};
use crate::input::{
    PointerSample, SketchEvent, SketchSession, ToolAction, constrain_pen_width,
};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or replaying a script.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read script: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: invalid event: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: {source}")]
    Color {
        line: usize,
        #[source]
        source: ColorParseError,
    },

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// One line of a replay script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
enum ScriptEvent {
    Press { x: f64, y: f64, t: u64 },
    Move { x: f64, y: f64, t: u64 },
    Release { x: f64, y: f64, t: u64 },
    Hover { x: f64, y: f64, t: u64 },
    SetColor { color: String },
    ToggleEraser,
    SetWidth { width: i64 },
    ToggleTheme,
    Clear,
    Save {
        #[serde(default)]
        path: Option<PathBuf>,
        /// Name the file from the export template instead of `path`
        #[serde(default)]
        auto: bool,
    },
}

impl ScriptEvent {
    fn into_event(self, line: usize, export: &ExportConfig) -> Result<SketchEvent, ReplayError> {
        let event: SketchEvent = match self {
            ScriptEvent::Press { x, y, t } => SketchEvent::Press(PointerSample::new(x, y, t)),
            ScriptEvent::Move { x, y, t } => SketchEvent::Move(PointerSample::new(x, y, t)),
            ScriptEvent::Release { x, y, t } => SketchEvent::Release(PointerSample::new(x, y, t)),
            ScriptEvent::Hover { x, y, t } => SketchEvent::Hover(PointerSample::new(x, y, t)),
            ScriptEvent::SetColor { color } => {
                let pen = color
                    .parse::<PenColor>()
                    .map_err(|source| ReplayError::Color { line, source })?;
                ToolAction::SetColor(pen).into()
            }
            ScriptEvent::ToggleEraser => ToolAction::ToggleEraser.into(),
            ScriptEvent::SetWidth { width } => {
                let constrained = constrain_pen_width(width);
                if i64::from(constrained) != width {
                    log::warn!("line {line}: width {width} outside 1-20, using {constrained}");
                }
                ToolAction::SetPenWidth(constrained).into()
            }
            ScriptEvent::ToggleTheme => ToolAction::ToggleTheme.into(),
            ScriptEvent::Clear => ToolAction::Clear.into(),
            ScriptEvent::Save { path, auto } => {
                let path = if auto {
                    Some(export::auto_export_path(export))
                } else {
                    path
                };
                ToolAction::Save(path).into()
            }
        };
        Ok(event)
    }
}

/// Parses a script into session events.
pub fn parse_script<R: BufRead>(
    reader: R,
    export: &ExportConfig,
) -> Result<Vec<SketchEvent>, ReplayError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let script_event: ScriptEvent = serde_json::from_str(trimmed).map_err(|source| {
            ReplayError::Parse {
                line: line_no,
                source,
            }
        })?;
        events.push(script_event.into_event(line_no, export)?);
    }
    Ok(events)
}

/// Loads a script from a file, or from stdin when `path` is `-`.
pub fn load_script(path: &Path, export: &ExportConfig) -> Result<Vec<SketchEvent>, ReplayError> {
    if path.as_os_str() == "-" {
        let stdin = io::stdin();
        return parse_script(stdin.lock(), export);
    }
    let file = File::open(path)?;
    parse_script(BufReader::new(file), export)
}

/// Summary of a finished replay.
#[derive(Debug, Default)]
pub struct ReplayOutcome {
    /// Number of events processed
    pub events: usize,
    /// Files written by save actions, in order
    pub exports: Vec<PathBuf>,
}

/// Feeds events to the session in order, servicing save requests as they come.
///
/// `status_sink` receives the status line after every event.
pub fn run<F>(
    session: &mut SketchSession,
    events: Vec<SketchEvent>,
    size: CanvasSize,
    ui_config: &UiConfig,
    mut status_sink: F,
) -> Result<ReplayOutcome, ReplayError>
where
    F: FnMut(&str),
{
    let mut outcome = ReplayOutcome::default();

    for event in events {
        session.handle(event);
        outcome.events += 1;
        status_sink(session.status_line());

        if let Some(request) = session.take_pending_export()
            && let Some(path) =
                export::export_png(session, size, Some(ui_config), request.path.as_deref())?
        {
            outcome.exports.push(path);
        }
    }

    log::debug!(
        "Replayed {} event(s), {} segment(s) on canvas",
        outcome.events,
        session.frame().len()
    );
    Ok(outcome)
}
