use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use drawkit::designer::{render_shapes, PixmapBackend};
use drawkit::{init_logging, Config, EventBus, Rgba, Session, SettingsPersistence, ShapeEditor};

#[derive(Parser)]
#[command(name = "drawkit")]
#[command(version, about = "Replay a recorded shape-editing session")]
struct Args {
    /// Session JSON to replay (an empty session when omitted)
    session: Option<PathBuf>,

    /// Config file (JSON or TOML); defaults to the platform config location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also rasterize the result to this PNG file
    #[arg(long)]
    png: Option<PathBuf>,

    /// PNG canvas size in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let mut persistence = match path {
        Some(path) => SettingsPersistence::with_path(path),
        None => SettingsPersistence::new()?,
    };
    Ok(persistence.load()?.clone())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_ref()).context("Failed to load settings")?;

    init_logging(&config.logging)?;
    tracing::debug!("drawkit {} (built {})", drawkit::VERSION, drawkit::BUILD_DATE);

    let session = match &args.session {
        Some(path) => Session::load(path)?,
        None => Session::default(),
    };

    let mut editor = ShapeEditor::new(&config, Arc::new(EventBus::new()));
    session.replay(&mut editor)?;

    let shapes = editor.shapes().to_vec();
    println!("{}", serde_json::to_string_pretty(&shapes)?);

    if let Some(path) = &args.png {
        let mut backend = PixmapBackend::new(args.width, args.height, editor.viewport(), Rgba::BLACK)
            .context("Canvas size must be non-zero")?;
        render_shapes(editor.shapes(), &mut backend);
        backend
            .into_pixmap()
            .save_png(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }

    Ok(())
}
