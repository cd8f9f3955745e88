//! # DrawKit
//!
//! Interactive editing of 2D vector shapes.
//!
//! ## Architecture
//!
//! DrawKit is organized as a workspace with multiple crates:
//!
//! 1. **drawkit-core** - Error taxonomy, shared enums, and the event bus
//! 2. **drawkit-settings** - Configuration loading, validation, persistence
//! 3. **drawkit-designer** - Geometry, hit-testing, drags, ordered lists,
//!    the shape editor, and rendering
//! 4. **drawkit** - Session replay binary that ties the crates together
//!
//! ## Features
//!
//! - **Shapes**: Polygons, perspective quads, ellipses, regular polygons, crosses
//! - **Editing**: Move, vertex, edge, and rotate drags with alt/control actions
//! - **Z-order**: Render order kept apart from storage order, with per-item
//!   move requests delivered over the event bus
//! - **Output**: Shape lists as JSON, rasterized previews as PNG

pub mod session;

pub use drawkit_core::{
    CreateMode, CursorKind, DragError, EditorEvent, Error, EventBus, GeometryError, Key,
    ListError, Modifiers, Result, ShapeKind,
};
pub use drawkit_designer as designer;
pub use drawkit_designer::{Look, Point, Rgba, Shape, ShapeEditor, ShapeEntry, Viewport};
pub use drawkit_settings::{Config, LoggingSettings, SettingsPersistence};
pub use session::{Session, Step};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - Human-readable or JSON-lines output on stderr
/// - RUST_LOG environment variable support, falling back to the configured level
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if settings.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()?;
    }

    Ok(())
}
