//! The per-document-view-group scene the renderer draws from.

use crate::clip::ClipPlane;
use crate::light::{default_lights, LightSlot, LIGHT_SLOTS};
use crate::material::Material;
use crate::overlay::OverlayCollection;
use serde::{Deserialize, Serialize};
use viewkit5_core::{shared, Rgb, Shared};

/// Shared handle to a scene, cloned into every object that needs to read or
/// write renderer state for the same document-view-group.
pub type SceneHandle = Shared<Scene>;

/// Mutable renderer state for one document-view-group.
///
/// The view-state layer forwards property edits into this object; the
/// renderer reads it once per frame. All access happens on the UI/render
/// thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub material: Material,
    pub background: Rgb,
    /// Perspective projection if true, orthographic otherwise
    pub perspective: bool,
    pub lights: [LightSlot; LIGHT_SLOTS],
    pub overlays: OverlayCollection,
    pub clip_plane: Option<ClipPlane>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene behind a shared handle.
    pub fn new_shared() -> SceneHandle {
        shared(Self::new())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            material: Material::default(),
            background: Rgb::new(0.16, 0.17, 0.20),
            perspective: true,
            lights: default_lights(),
            overlays: OverlayCollection::new(),
            clip_plane: None,
        }
    }
}
