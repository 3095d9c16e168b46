//! Shared type aliases used throughout the workspace.

mod aliases;

pub use aliases::*;
