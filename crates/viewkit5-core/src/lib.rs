//! # ViewKit5 Core
//!
//! Core types and utilities shared across the ViewKit5 workspace:
//! error handling, color values, document-view-group identities, and
//! single-threaded shared-state aliases for UI code.

pub mod color;
pub mod error;
pub mod id;
pub mod types;

pub use color::Rgb;
pub use error::{Error, Result};
pub use id::DocViewsId;
pub use types::{shared, Shared};
