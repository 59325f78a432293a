//! PNG export of the canvas.
//!
//! The canvas is re-rendered into an off-screen Cairo image surface of the
//! canvas size and written as PNG. A missing destination (the user declined
//! the save dialog) is a silent no-op.

use crate::config::{ExportConfig, UiConfig};
use crate::draw::render_canvas;
use crate::input::SketchSession;
use crate::ui;
use chrono::Local;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("canvas size {width}x{height} is not supported")]
    InvalidSize { width: u32, height: u32 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("file system error: {0}")]
    Io(#[from] std::io::Error),
}

/// Canvas bounding rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Renders the session into a new image surface.
///
/// Only committed segments are drawn; the live preview is never exported. When `ui_config` is given and its status bar is enabled, the status line is drawn
/// on top of the canvas.
pub fn render_to_surface(
    session: &SketchSession,
    size: CanvasSize,
    ui_config: Option<&UiConfig>,
) -> Result<cairo::ImageSurface, ExportError> {
    let invalid = || ExportError::InvalidSize {
        width: size.width,
        height: size.height,
    };
    let width = i32::try_from(size.width).map_err(|_| invalid())?;
    let height = i32::try_from(size.height).map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render_canvas(
            &ctx,
            session.tool().background_color(),
            session.frame().segments(),
            None,
        );

        if let Some(ui_config) = ui_config.filter(|c| c.show_status_bar) {
            ui::render_status_bar(
                &ctx,
                session,
                ui_config.status_bar_position,
                &ui_config.status_bar_style,
                size.width,
                size.height,
            );
        }
    }
    surface.flush();
    Ok(surface)
}

/// Writes the canvas to `path` as PNG.
///
/// Returns `Ok(None)` without touching the file system when no path was
/// chosen.
pub fn export_png(
    session: &SketchSession,
    size: CanvasSize,
    ui_config: Option<&UiConfig>,
    path: Option<&Path>,
) -> Result<Option<PathBuf>, ExportError> {
    let Some(path) = path else {
        log::debug!("Export cancelled: no destination chosen");
        return Ok(None);
    };

    let surface = render_to_surface(session, size, ui_config)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    surface.write_to_png(&mut writer)?;

    log::info!(
        "Exported {} segment(s) to {} ({}x{})",
        session.frame().len(),
        path.display(),
        size.width,
        size.height
    );
    Ok(Some(path.to_path_buf()))
}

/// Builds a timestamped destination inside the configured export directory.
///
/// The directory is created by [`export_png`] when the file is written.
pub fn auto_export_path(config: &ExportConfig) -> PathBuf {
    expand_tilde(&config.directory).join(generate_filename(&config.filename_template, "png"))
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<(), ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
