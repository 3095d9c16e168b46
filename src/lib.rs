//! # ViewKit5
//!
//! Per-document view-state model for a desktop CAD viewer: projection and
//! material parameters, fixed light slots, decorative overlays (axis,
//! compass, ruler), a section clip plane, and configurable camera-gesture
//! bindings, all persistable to the settings store.
//!
//! ## Architecture
//!
//! ViewKit5 is organized as a workspace with multiple crates:
//!
//! 1. **viewkit5-core** - Shared types, colors, ids, errors
//! 2. **viewkit5-scene** - Scene-graph state: materials, lights, overlays, clip planes
//! 3. **viewkit5-settings** - Config paths and record load/save (JSON/TOML)
//! 4. **viewkit5-viewstate** - View states, their registry, and the view surface controller
//! 5. **viewkit5** - Facade crate that re-exports the public API

pub use viewkit5_core::{shared, DocViewsId, Error, Result, Rgb, Shared};

pub use viewkit5_scene::{
    ClipDirection, ClipPlane, DocumentViews, LightSlot, Material, OverlayCollection,
    OverlayHandle, PolygonStyle, Scene, SceneHandle, LIGHT_SLOTS,
};

pub use viewkit5_settings::{
    config_dir, default_view_path, ensure_config_dir, load_record, save_record, view_path,
    SettingsError, SettingsResult,
};

pub use viewkit5_viewstate::{
    InputTrigger, LightDescriptor, LightRecord, Modifiers, MouseButton, OperationSettings,
    ProgressPhase, ProgressTracker, ViewGesture, ViewOperationBinding, ViewRecord, ViewState,
    ViewStateRegistry, ViewSurface,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
