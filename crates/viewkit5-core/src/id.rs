//! Stable identities for document-view-groups.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity key of a document-view-group.
///
/// One or more viewports render the same logical document through a single
/// view-group; this key is what the view-state registry indexes by. The key
/// is a value, not a reference to the group, so registries never keep the
/// group itself alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocViewsId(Uuid);

impl DocViewsId {
    /// Create a fresh identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocViewsId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocViewsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
