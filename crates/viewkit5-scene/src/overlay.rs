//! Decorative overlay handles and the shared overlay collection.
//!
//! An overlay is an opaque drawable decoration (axis cross, compass, ruler)
//! identified by a handle. Membership in the scene's collection is what the
//! renderer iterates when drawing decorations, so for most overlays presence
//! in the collection IS the visibility flag.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle to one drawable overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlayHandle(Uuid);

impl OverlayHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OverlayHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered collection of overlay handles drawn each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlayCollection {
    items: Vec<OverlayHandle>,
}

impl OverlayCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handle. Returns false if it was already present (no duplicate
    /// is inserted).
    pub fn add(&mut self, handle: OverlayHandle) -> bool {
        if self.contains(handle) {
            return false;
        }
        self.items.push(handle);
        true
    }

    /// Remove a handle. Returns false if it was not present.
    pub fn remove(&mut self, handle: OverlayHandle) -> bool {
        match self.items.iter().position(|h| *h == handle) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, handle: OverlayHandle) -> bool {
        self.items.contains(&handle)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = OverlayHandle> + '_ {
        self.items.iter().copied()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_duplicate_free() {
        let mut overlays = OverlayCollection::new();
        let h = OverlayHandle::new();

        assert!(overlays.add(h));
        assert!(!overlays.add(h));
        assert_eq!(overlays.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut overlays = OverlayCollection::new();
        let h = OverlayHandle::new();

        assert!(!overlays.remove(h));
        overlays.add(h);
        assert!(overlays.remove(h));
        assert!(!overlays.remove(h));
        assert!(overlays.is_empty());
    }

    #[test]
    fn test_membership_is_per_handle() {
        let mut overlays = OverlayCollection::new();
        let a = OverlayHandle::new();
        let b = OverlayHandle::new();

        overlays.add(a);
        assert!(overlays.contains(a));
        assert!(!overlays.contains(b));
    }
}
