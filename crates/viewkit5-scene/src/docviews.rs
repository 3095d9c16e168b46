//! The document-view-group: the logical document entity viewports render.

use crate::scene::{Scene, SceneHandle};
use viewkit5_core::DocViewsId;

/// One logical document/view-group.
///
/// Owns the scene all of its viewports render. View state is looked up by
/// the group's identity and writes into the scene through a cloned handle;
/// the group itself is never owned by the view-state layer.
#[derive(Debug, Clone)]
pub struct DocumentViews {
    id: DocViewsId,
    scene: SceneHandle,
}

impl DocumentViews {
    pub fn new() -> Self {
        Self {
            id: DocViewsId::new(),
            scene: Scene::new_shared(),
        }
    }

    pub fn id(&self) -> DocViewsId {
        self.id
    }

    pub fn scene(&self) -> &SceneHandle {
        &self.scene
    }
}

impl Default for DocumentViews {
    fn default() -> Self {
        Self::new()
    }
}
