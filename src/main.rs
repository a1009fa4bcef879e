use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use sketchpad::draw::CairoCanvas;
use sketchpad::input::PaintSession;
use sketchpad::voice::{ExternalRecognizer, VoiceInput};
use sketchpad::{Config, PaintApp, script};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Raster paint canvas driven by recorded page events")]
struct Cli {
    /// JSON file with the events to replay
    #[arg(long, short = 's', value_name = "FILE", required_unless_present = "print_config")]
    script: Option<PathBuf>,

    /// Where to write the final PNG (default: export directory from config)
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "TOML")]
    config: Option<PathBuf>,

    /// Canvas width in pixels (overrides config)
    #[arg(long, value_name = "N")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long, value_name = "N")]
    height: Option<u32>,

    /// Disable voice input (voice events raise no transcript)
    #[arg(long, action = ArgAction::SetTrue)]
    no_voice: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let Some(script_path) = cli.script.as_deref() else {
        bail!("--script is required");
    };
    let events = script::load_script(script_path)?;

    let canvas = CairoCanvas::new(config.canvas.width, config.canvas.height, config.background())
        .context("Failed to create canvas")?;
    let session = PaintSession::new(canvas, config.session_settings())
        .context("Failed to start drawing session")?;

    let voice = if cli.no_voice || !config.voice.enabled {
        VoiceInput::unsupported()
    } else {
        VoiceInput::new(
            Some(Box::new(ExternalRecognizer::default())),
            config.voice.language.clone(),
        )
    };

    let mut app = PaintApp::new(session, voice, config.export_config());
    log::info!("Replaying {} events", events.len());
    for notice in script::run_script(&mut app, events) {
        println!("notice: {}", notice);
    }

    for path in app.saved_files() {
        println!("saved: {}", path.display());
    }

    let output = match &cli.output {
        Some(path) => {
            app.save_to(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path.clone()
        }
        None => app
            .save_to_export_dir()
            .context("Failed to save canvas to export directory")?,
    };

    println!("{}", app.status_text());
    println!("wrote: {}", output.display());
    Ok(())
}
