//! Non-owning view over one fixed renderer light slot.

use glam::{Vec3, Vec4};
use viewkit5_core::Rgb;
use viewkit5_scene::SceneHandle;

/// Facade over one of the renderer's numbered light units.
///
/// The slot storage lives in the scene; the descriptor only carries the
/// scene handle and the slot index, so cloning it never duplicates a light.
#[derive(Debug, Clone)]
pub struct LightDescriptor {
    scene: SceneHandle,
    slot: usize,
}

impl LightDescriptor {
    /// Wrap slot `slot` of `scene`. The index must be below
    /// [`viewkit5_scene::LIGHT_SLOTS`].
    pub fn new(scene: SceneHandle, slot: usize) -> Self {
        debug_assert!(slot < viewkit5_scene::LIGHT_SLOTS);
        Self { scene, slot }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn enabled(&self) -> bool {
        self.scene.borrow().lights[self.slot].enabled
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.scene.borrow_mut().lights[self.slot].enabled = enabled;
    }

    pub fn world_space(&self) -> bool {
        self.scene.borrow().lights[self.slot].world_space
    }

    pub fn set_world_space(&self, world_space: bool) {
        self.scene.borrow_mut().lights[self.slot].world_space = world_space;
    }

    pub fn ambient(&self) -> Rgb {
        self.scene.borrow().lights[self.slot].ambient
    }

    pub fn set_ambient(&self, color: Rgb) {
        self.scene.borrow_mut().lights[self.slot].ambient = color;
    }

    pub fn diffuse(&self) -> Rgb {
        self.scene.borrow().lights[self.slot].diffuse
    }

    pub fn set_diffuse(&self, color: Rgb) {
        self.scene.borrow_mut().lights[self.slot].diffuse = color;
    }

    pub fn specular(&self) -> Rgb {
        self.scene.borrow().lights[self.slot].specular
    }

    pub fn set_specular(&self, color: Rgb) {
        self.scene.borrow_mut().lights[self.slot].specular = color;
    }

    /// Homogeneous position; `w == 0` means directional.
    pub fn position(&self) -> Vec4 {
        self.scene.borrow().lights[self.slot].position
    }

    pub fn set_position(&self, position: Vec4) {
        self.scene.borrow_mut().lights[self.slot].position = position;
    }

    /// Make the light directional along `direction`.
    pub fn set_direction(&self, direction: Vec3) {
        self.set_position(direction.extend(0.0));
    }

    pub fn is_directional(&self) -> bool {
        self.scene.borrow().lights[self.slot].is_directional()
    }
}
