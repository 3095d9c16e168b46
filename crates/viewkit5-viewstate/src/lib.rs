//! # ViewKit5 View State
//!
//! The per-document view-state model. Every document-view-group gets one
//! [`ViewState`]: a live, mutable, persistable bundle of rendering
//! parameters (projection mode, material, lights, decorative overlays, clip
//! plane, input-gesture bindings). The [`ViewStateRegistry`] owns the
//! mapping from group identity to state and handles seeding, save/restore
//! against the shared default record, and load from named folders.
//!
//! Change propagation is poll-based: every mutator bumps a revision counter
//! and the [`ViewSurface`] controller repaints when the counter moves.

pub mod bindings;
pub mod light;
pub mod progress;
pub mod record;
pub mod registry;
pub mod state;
pub mod surface;

pub use bindings::{
    InputTrigger, Modifiers, MouseButton, OperationSettings, ViewGesture, ViewOperationBinding,
};
pub use light::LightDescriptor;
pub use progress::{ProgressPhase, ProgressTracker};
pub use record::{LightRecord, ViewRecord};
pub use registry::ViewStateRegistry;
pub use state::ViewState;
pub use surface::ViewSurface;
