//! Surface material parameters and the polygon draw-style bitset.

use serde::{Deserialize, Serialize};
use viewkit5_core::Rgb;

/// Polygon draw style as a bitset of {face, edge}.
///
/// The stored value may hold any combination; toolbar buttons that present
/// face-only / edge-only / both as mutually exclusive choices are a derived
/// projection over this bitset, not separate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolygonStyle(u8);

impl PolygonStyle {
    /// Filled faces.
    pub const FACE: PolygonStyle = PolygonStyle(0b01);
    /// Wireframe edges.
    pub const EDGE: PolygonStyle = PolygonStyle(0b10);
    /// Faces with edges drawn on top.
    pub const FACE_EDGE: PolygonStyle = PolygonStyle(0b11);
    /// Nothing drawn.
    pub const NONE: PolygonStyle = PolygonStyle(0b00);

    pub const fn contains(self, other: PolygonStyle) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    #[must_use]
    pub const fn with(self, other: PolygonStyle) -> PolygonStyle {
        PolygonStyle(self.0 | other.0)
    }

    #[must_use]
    pub const fn without(self, other: PolygonStyle) -> PolygonStyle {
        PolygonStyle(self.0 & !other.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Reconstruct from raw bits; out-of-range bits are masked off.
    pub const fn from_bits(bits: u8) -> PolygonStyle {
        PolygonStyle(bits & 0b11)
    }
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self::FACE
    }
}

impl std::fmt::Display for PolygonStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::FACE => write!(f, "Face"),
            Self::EDGE => write!(f, "Edge"),
            Self::FACE_EDGE => write!(f, "Face+Edge"),
            _ => write!(f, "None"),
        }
    }
}

/// Material parameters for the document geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base (diffuse) color
    pub color: Rgb,
    /// Specular highlight color
    pub specular_color: Rgb,
    /// Specular exponent
    pub shininess: f32,
    /// Opacity, 1.0 = fully opaque
    pub opacity: f32,
    /// Polygon draw style
    pub polygon_style: PolygonStyle,
    /// Name of the shader program used to draw the geometry
    pub shader_name: String,
    /// Whether back faces are culled
    pub backside: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Rgb::new(0.7, 0.7, 0.75),
            specular_color: Rgb::WHITE,
            shininess: 32.0,
            opacity: 1.0,
            polygon_style: PolygonStyle::default(),
            shader_name: "standard".to_string(),
            backside: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitset_combinations() {
        let style = PolygonStyle::FACE.with(PolygonStyle::EDGE);
        assert_eq!(style, PolygonStyle::FACE_EDGE);
        assert!(style.contains(PolygonStyle::FACE));
        assert!(style.contains(PolygonStyle::EDGE));

        let face_only = style.without(PolygonStyle::EDGE);
        assert_eq!(face_only, PolygonStyle::FACE);
        assert!(!face_only.contains(PolygonStyle::EDGE));
    }

    #[test]
    fn test_bits_round_trip() {
        for bits in 0u8..=3 {
            assert_eq!(PolygonStyle::from_bits(bits).bits(), bits);
        }
        // Stray high bits are masked
        assert_eq!(PolygonStyle::from_bits(0xFF), PolygonStyle::FACE_EDGE);
    }

    #[test]
    fn test_none_contains_nothing() {
        assert!(!PolygonStyle::NONE.contains(PolygonStyle::FACE));
        assert!(!PolygonStyle::FACE.contains(PolygonStyle::NONE));
    }

    #[test]
    fn test_display() {
        assert_eq!(PolygonStyle::FACE.to_string(), "Face");
        assert_eq!(PolygonStyle::FACE_EDGE.to_string(), "Face+Edge");
    }
}
