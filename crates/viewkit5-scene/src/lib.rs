//! # ViewKit5 Scene
//!
//! The renderer-facing scene model. Each document-view-group owns one
//! [`Scene`]: a material, a background color, a projection flag, four fixed
//! light slots, a decorative-overlay collection, and an optional clip plane.
//! The view-state layer mutates these objects; the renderer reads them when
//! drawing a frame.

pub mod clip;
pub mod docviews;
pub mod light;
pub mod material;
pub mod overlay;
pub mod scene;

pub use clip::{ClipDirection, ClipPlane};
pub use docviews::DocumentViews;
pub use light::{LightSlot, LIGHT_SLOTS};
pub use material::{Material, PolygonStyle};
pub use overlay::{OverlayCollection, OverlayHandle};
pub use scene::{Scene, SceneHandle};
