use anyhow::Context;
use clap::{ArgAction, Parser};
use sketchpad::config::ThemeTogglePolicy;
use sketchpad::export::{self, CanvasSize};
use sketchpad::{Config, SketchSession, replay};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHPAD_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Freehand sketching engine with speed-aware strokes"
)]
struct Cli {
    /// Replay a JSON Lines event script (`-` reads stdin)
    #[arg(long, short = 'r', value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Write the final canvas to this PNG file
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Initial theme (light or dark)
    #[arg(long, short = 't', value_name = "THEME", value_parser = ["light", "dark"])]
    theme: Option<String>,

    /// What happens to existing strokes when the theme toggles
    #[arg(long, value_name = "POLICY", value_enum)]
    theme_toggle: Option<ThemeTogglePolicy>,

    /// Print the status line after every event
    #[arg(long, action = ArgAction::SetTrue)]
    print_status: bool,

    /// Draw the status bar into exported images
    #[arg(long, action = ArgAction::SetTrue)]
    show_status_bar: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    write_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.write_default_config {
        Config::default().save()?;
        println!("Wrote {}", Config::get_config_path()?.display());
        return Ok(());
    }

    let Some(script) = cli.replay.as_deref() else {
        // No script: show usage
        println!("sketchpad: Freehand sketching engine with speed-aware strokes");
        println!();
        println!("Usage:");
        println!("  sketchpad --replay <FILE> [--output <PNG>]   Replay an event script");
        println!("  sketchpad --write-default-config            Create the config file");
        println!("  sketchpad --help                            Show help");
        println!();
        println!("Script format (one JSON object per line):");
        println!("  {{\"event\": \"press\", \"x\": 0, \"y\": 0, \"t\": 0}}");
        println!("  {{\"event\": \"move\", \"x\": 3, \"y\": 4, \"t\": 100}}");
        println!("  {{\"event\": \"release\", \"x\": 3, \"y\": 4, \"t\": 120}}");
        println!("  {{\"event\": \"set-color\", \"color\": \"crimson\"}}");
        println!("  {{\"event\": \"toggle-eraser\"}}  {{\"event\": \"toggle-theme\"}}");
        println!("  {{\"event\": \"set-width\", \"width\": 8}}  {{\"event\": \"clear\"}}");
        println!("  {{\"event\": \"save\", \"path\": \"out.png\"}}");
        return Ok(());
    };

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    if let Some(theme) = cli.theme {
        config.theme.default_theme = theme;
    }
    if let Some(policy) = cli.theme_toggle {
        config.canvas.on_theme_toggle = policy;
    }
    if cli.show_status_bar {
        config.ui.show_status_bar = true;
    }
    // Overrides go through the same range checks as the file
    config.validate_and_clamp();

    let events = replay::load_script(script, &config.export)
        .with_context(|| format!("Failed to load script {}", script.display()))?;
    log::info!("Loaded {} event(s) from {}", events.len(), script.display());

    let size = CanvasSize::new(config.canvas.width, config.canvas.height);
    let mut session = SketchSession::from_config(&config);
    let print_status = cli.print_status;
    let outcome = replay::run(&mut session, events, size, &config.ui, |line| {
        if print_status {
            println!("{line}");
        }
    })?;

    for path in &outcome.exports {
        println!("Saved {}", path.display());
    }

    if let Some(output) = cli.output.as_deref()
        && let Some(path) = export::export_png(&session, size, Some(&config.ui), Some(output))?
    {
        println!("Saved {}", path.display());
    }

    log::info!(
        "Replay finished: {} event(s), {} segment(s)",
        outcome.events,
        session.frame().len()
    );
    Ok(())
}
