//! # ViewKit5 Settings
//!
//! The settings-store collaborator: platform config-directory resolution and
//! JSON/TOML persistence of serde records. The view-state crate defines the
//! record types; this crate owns where they live on disk and how they are
//! read and written.

pub mod error;
pub mod store;

pub use error::{SettingsError, SettingsResult};
pub use store::{
    config_dir, default_view_path, ensure_config_dir, load_record, save_record, view_path,
};
