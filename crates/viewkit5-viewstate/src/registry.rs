//! Registry mapping document-view-group identities to their view states.

use crate::record::ViewRecord;
use crate::state::ViewState;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;
use viewkit5_core::{shared, DocViewsId, Shared};
use viewkit5_scene::DocumentViews;
use viewkit5_settings::{view_path, SettingsResult};

/// Owning container of view states, indexed by group identity.
///
/// Exactly one `ViewState` exists per distinct identity for as long as the
/// entry is registered. The registry also holds the shared default record:
/// new entries are seeded from it, `save` copies a live state into it, and
/// `restore` copies it back out. Entries are removed by an explicit
/// [`ViewStateRegistry::release`] when the owning group is destroyed.
#[derive(Debug, Default)]
pub struct ViewStateRegistry {
    entries: HashMap<DocViewsId, Shared<ViewState>>,
    default_record: ViewRecord,
}

impl ViewStateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a specific default record instead of the built-in one.
    pub fn with_default(default_record: ViewRecord) -> Self {
        Self {
            entries: HashMap::new(),
            default_record,
        }
    }

    /// Fetch the state for a group, creating and seeding it on first lookup.
    /// Repeated calls with the same identity return the same instance.
    pub fn get(&mut self, views: &DocumentViews) -> Shared<ViewState> {
        if let Some(state) = self.entries.get(&views.id()) {
            return state.clone();
        }

        debug!(group = %views.id(), "creating view state");
        let mut state = ViewState::new(views);
        self.default_record.apply(&mut state);
        let state = shared(state);
        self.entries.insert(views.id(), state.clone());
        state
    }

    /// Look up a registered state. An absent identity means "no current
    /// view" and yields `None`.
    pub fn find(&self, id: DocViewsId) -> Option<Shared<ViewState>> {
        self.entries.get(&id).cloned()
    }

    /// Copy the group's current values into the shared default record.
    /// No-op when the identity is not registered.
    pub fn save(&mut self, id: DocViewsId) {
        if let Some(state) = self.entries.get(&id) {
            self.default_record = ViewRecord::capture(&state.borrow());
            debug!(group = %id, "saved view state as default");
        }
    }

    /// Copy the shared default record back onto the group's state, creating
    /// the state first if needed.
    pub fn restore(&mut self, views: &DocumentViews) {
        let state = self.get(views);
        self.default_record.apply(&mut state.borrow_mut());
    }

    /// Read a view record from a named folder and apply it onto the group's
    /// state. A missing or malformed record surfaces as a settings error.
    pub fn load_from(&mut self, views: &DocumentViews, folder: &Path) -> SettingsResult<()> {
        let record = ViewRecord::load_from_file(&view_path(folder))?;
        let state = self.get(views);
        record.apply(&mut state.borrow_mut());
        debug!(group = %views.id(), folder = %folder.display(), "loaded view state");
        Ok(())
    }

    /// Drop the entry for a destroyed group. Returns whether an entry
    /// existed. Outstanding shared handles stay alive but are no longer
    /// reachable through the registry.
    pub fn release(&mut self, id: DocViewsId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            debug!(group = %id, "released view state");
        }
        removed
    }

    /// Persist the shared default record.
    pub fn save_default_to(&self, path: &Path) -> SettingsResult<()> {
        self.default_record.save_to_file(path)
    }

    /// Replace the shared default record from a file.
    pub fn load_default_from(&mut self, path: &Path) -> SettingsResult<()> {
        self.default_record = ViewRecord::load_from_file(path)?;
        Ok(())
    }

    pub fn default_record(&self) -> &ViewRecord {
        &self.default_record
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
