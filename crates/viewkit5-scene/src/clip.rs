//! Half-space clip plane applied to the document geometry.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Orientation of the clip plane: view-relative, or aligned to a world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipDirection {
    /// Perpendicular to the current view direction
    View,
    #[serde(rename = "+x")]
    PlusX,
    #[serde(rename = "+y")]
    PlusY,
    #[serde(rename = "+z")]
    PlusZ,
    #[serde(rename = "-x")]
    MinusX,
    #[serde(rename = "-y")]
    MinusY,
    #[serde(rename = "-z")]
    MinusZ,
}

impl ClipDirection {
    /// World-space plane normal, or `None` for the view-relative direction
    /// (the renderer derives that one from the camera each frame).
    pub fn axis(self) -> Option<Vec3> {
        match self {
            Self::View => None,
            Self::PlusX => Some(Vec3::X),
            Self::PlusY => Some(Vec3::Y),
            Self::PlusZ => Some(Vec3::Z),
            Self::MinusX => Some(-Vec3::X),
            Self::MinusY => Some(-Vec3::Y),
            Self::MinusZ => Some(-Vec3::Z),
        }
    }
}

impl Default for ClipDirection {
    fn default() -> Self {
        Self::View
    }
}

impl std::fmt::Display for ClipDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::View => write!(f, "View"),
            Self::PlusX => write!(f, "+X"),
            Self::PlusY => write!(f, "+Y"),
            Self::PlusZ => write!(f, "+Z"),
            Self::MinusX => write!(f, "-X"),
            Self::MinusY => write!(f, "-Y"),
            Self::MinusZ => write!(f, "-Z"),
        }
    }
}

/// The clip plane itself. One per scene at most; existence of the plane is
/// what "clipping enabled" means.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClipPlane {
    pub direction: ClipDirection,
}

impl ClipPlane {
    pub fn new(direction: ClipDirection) -> Self {
        Self { direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_axes() {
        assert_eq!(ClipDirection::PlusX.axis(), Some(Vec3::X));
        assert_eq!(ClipDirection::MinusZ.axis(), Some(-Vec3::Z));
        assert_eq!(ClipDirection::View.axis(), None);
    }

    #[test]
    fn test_default_is_view_relative() {
        assert_eq!(ClipPlane::default().direction, ClipDirection::View);
    }
}
