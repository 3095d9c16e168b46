//! Persisted snapshot of a view state.
//!
//! `ViewRecord` is the settings-store record: a plain serde value holding
//! every persisted view-state field. The registry keeps one as the shared
//! default, and named view folders store one on disk as `view.toml` (or
//! `.json`).

use crate::bindings::OperationSettings;
use crate::state::ViewState;
use glam::Vec4;
use serde::{Deserialize, Serialize};
use std::path::Path;
use viewkit5_core::Rgb;
use viewkit5_scene::{ClipDirection, LightSlot, PolygonStyle, LIGHT_SLOTS};
use viewkit5_settings::{load_record, save_record, SettingsResult};

/// Persisted form of one light slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightRecord {
    pub enabled: bool,
    pub world_space: bool,
    pub ambient: Rgb,
    pub diffuse: Rgb,
    pub specular: Rgb,
    pub position: Vec4,
}

impl From<LightSlot> for LightRecord {
    fn from(slot: LightSlot) -> Self {
        Self {
            enabled: slot.enabled,
            world_space: slot.world_space,
            ambient: slot.ambient,
            diffuse: slot.diffuse,
            specular: slot.specular,
            position: slot.position,
        }
    }
}

impl Default for LightRecord {
    fn default() -> Self {
        LightSlot::default().into()
    }
}

/// The persisted subset of a view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRecord {
    pub perspective: bool,
    pub shininess: f32,
    pub opacity: f32,
    pub shader_name: String,
    pub backside: bool,
    pub show_axis: bool,
    pub show_compass: bool,
    pub show_ruler: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<ClipDirection>,
    pub polygon_style: PolygonStyle,
    pub color: Rgb,
    pub specular_color: Rgb,
    pub background: Rgb,
    pub lights: [LightRecord; LIGHT_SLOTS],
    pub operation: OperationSettings,
}

impl Default for ViewRecord {
    fn default() -> Self {
        let scene = viewkit5_scene::Scene::default();
        let mut lights = [LightRecord::default(); LIGHT_SLOTS];
        for (record, slot) in lights.iter_mut().zip(scene.lights) {
            *record = slot.into();
        }
        Self {
            perspective: scene.perspective,
            shininess: scene.material.shininess,
            opacity: scene.material.opacity,
            shader_name: scene.material.shader_name.clone(),
            backside: scene.material.backside,
            show_axis: false,
            show_compass: false,
            show_ruler: false,
            clip: None,
            polygon_style: scene.material.polygon_style,
            color: scene.material.color,
            specular_color: scene.material.specular_color,
            background: scene.background,
            lights,
            operation: OperationSettings::default(),
        }
    }
}

impl ViewRecord {
    /// Snapshot the current values of a live view state.
    pub fn capture(state: &ViewState) -> Self {
        let mut lights = [LightRecord::default(); LIGHT_SLOTS];
        for (record, slot) in lights.iter_mut().zip(state.scene().borrow().lights) {
            *record = slot.into();
        }
        Self {
            perspective: state.perspective(),
            shininess: state.shininess(),
            opacity: state.opacity(),
            shader_name: state.shader_name(),
            backside: state.backside(),
            show_axis: state.show_axis(),
            show_compass: state.show_compass(),
            show_ruler: state.show_ruler(),
            clip: state.find_clip_plane(),
            polygon_style: state.polygon_style(),
            color: state.color(),
            specular_color: state.specular_color(),
            background: state.background_color(),
            lights,
            operation: state.operation().clone(),
        }
    }

    /// Copy the recorded values onto a live view state, overwriting its
    /// current edits. Axis visibility only takes effect once an axis overlay
    /// handle is installed on the state.
    pub fn apply(&self, state: &mut ViewState) {
        state.set_perspective(self.perspective);
        state.set_polygon_style(self.polygon_style);
        state.set_backside(self.backside);
        state.set_color(self.color);
        state.set_specular_color(self.specular_color);
        state.set_shininess(self.shininess);
        state.set_opacity(self.opacity);
        state.set_background_color(self.background);
        state.set_shader_name(self.shader_name.clone());

        for (light, record) in state.lights().iter().zip(&self.lights) {
            light.set_enabled(record.enabled);
            light.set_world_space(record.world_space);
            light.set_ambient(record.ambient);
            light.set_diffuse(record.diffuse);
            light.set_specular(record.specular);
            light.set_position(record.position);
        }

        state.set_show_axis(self.show_axis);
        state.set_show_compass(self.show_compass);
        state.set_show_ruler(self.show_ruler);

        match self.clip {
            Some(direction) => state.set_clip_direction(direction),
            None => state.remove_clip_plane(),
        }

        state.set_operation(self.operation.clone());
    }

    /// Load a record from a `.json` or `.toml` file.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        load_record(path)
    }

    /// Save the record to a `.json` or `.toml` file.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        save_record(path, self)
    }
}
