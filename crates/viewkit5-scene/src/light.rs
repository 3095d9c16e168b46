//! Fixed renderer light slots.

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};
use viewkit5_core::Rgb;

/// Number of fixed light units the renderer exposes.
pub const LIGHT_SLOTS: usize = 4;

/// Raw storage for one fixed light unit.
///
/// The homogeneous position follows the OpenGL convention: `w == 0` makes
/// the light directional with direction `xyz` (magnitude irrelevant);
/// `w != 0` places a positional light at `xyz / w`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSlot {
    pub enabled: bool,
    /// World-space position if true, camera-space otherwise
    pub world_space: bool,
    pub ambient: Rgb,
    pub diffuse: Rgb,
    pub specular: Rgb,
    pub position: Vec4,
}

impl LightSlot {
    /// True when the slot describes a directional light.
    pub fn is_directional(&self) -> bool {
        self.position.w == 0.0
    }

    /// Direction of a directional light (unnormalized `xyz`).
    pub fn direction(&self) -> Option<Vec3> {
        self.is_directional().then(|| self.position.truncate())
    }

    /// Cartesian position of a positional light (`xyz / w`).
    pub fn position_point(&self) -> Option<Vec3> {
        (!self.is_directional()).then(|| self.position.truncate() / self.position.w)
    }
}

impl Default for LightSlot {
    fn default() -> Self {
        Self {
            enabled: false,
            world_space: false,
            ambient: Rgb::BLACK,
            diffuse: Rgb::WHITE,
            specular: Rgb::WHITE,
            // Camera-space headlight direction
            position: Vec4::new(0.0, 0.0, 1.0, 0.0),
        }
    }
}

/// Default light bank: a single enabled camera-space headlight in slot 0.
pub(crate) fn default_lights() -> [LightSlot; LIGHT_SLOTS] {
    let mut lights = [LightSlot::default(); LIGHT_SLOTS];
    lights[0].enabled = true;
    lights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_when_w_zero() {
        let slot = LightSlot::default();
        assert!(slot.is_directional());
        assert_eq!(slot.direction(), Some(Vec3::new(0.0, 0.0, 1.0)));
        assert_eq!(slot.position_point(), None);
    }

    #[test]
    fn test_positional_when_w_nonzero() {
        let slot = LightSlot {
            position: Vec4::new(2.0, 4.0, 6.0, 2.0),
            ..LightSlot::default()
        };
        assert!(!slot.is_directional());
        assert_eq!(slot.direction(), None);
        assert_eq!(slot.position_point(), Some(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_default_bank_has_one_headlight() {
        let lights = default_lights();
        assert!(lights[0].enabled);
        assert!(lights[1..].iter().all(|l| !l.enabled));
    }
}
