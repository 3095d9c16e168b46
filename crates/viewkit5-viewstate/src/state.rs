//! The per-document-view-group view state.

use crate::bindings::{OperationSettings, ViewGesture, ViewOperationBinding};
use crate::light::LightDescriptor;
use viewkit5_core::{DocViewsId, Rgb};
use viewkit5_scene::{
    ClipDirection, ClipPlane, DocumentViews, OverlayHandle, PolygonStyle, SceneHandle, LIGHT_SLOTS,
};

/// Live rendering parameters for one document-view-group.
///
/// Every setter forwards the value into the backing scene, then bumps the
/// revision counter so the view surface knows to repaint without polling
/// individual fields. The one exception is [`ViewState::set_shader_name`],
/// which mutates the scene but leaves the counter alone: shader swaps go
/// through the renderer's program cache, which schedules its own redraw
/// when the program is rebuilt.
#[derive(Debug, Clone)]
pub struct ViewState {
    doc_group: DocViewsId,
    scene: SceneHandle,
    lights: [LightDescriptor; LIGHT_SLOTS],
    axis_scene: Option<OverlayHandle>,
    show_axis: bool,
    compass: OverlayHandle,
    ruler: OverlayHandle,
    operation: OperationSettings,
    last_touch: u64,
}

impl ViewState {
    /// Create a fresh state bound to the group's scene. Overlay handles for
    /// the compass and ruler are allocated here; they stay out of the scene's
    /// overlay collection until shown.
    pub fn new(views: &DocumentViews) -> Self {
        let scene = views.scene().clone();
        let lights = std::array::from_fn(|slot| LightDescriptor::new(scene.clone(), slot));
        Self {
            doc_group: views.id(),
            scene,
            lights,
            axis_scene: None,
            show_axis: false,
            compass: OverlayHandle::new(),
            ruler: OverlayHandle::new(),
            operation: OperationSettings::default(),
            last_touch: 0,
        }
    }

    /// Identity of the owning document-view-group.
    pub fn doc_group(&self) -> DocViewsId {
        self.doc_group
    }

    pub fn scene(&self) -> &SceneHandle {
        &self.scene
    }

    /// Current revision. Strictly increases on every state change; the
    /// rendering loop compares it against the last drawn revision once per
    /// frame.
    pub fn revision(&self) -> u64 {
        self.last_touch
    }

    fn touch(&mut self) {
        self.last_touch += 1;
    }

    // --- material / projection properties -----------------------------------

    pub fn perspective(&self) -> bool {
        self.scene.borrow().perspective
    }

    pub fn set_perspective(&mut self, perspective: bool) {
        self.scene.borrow_mut().perspective = perspective;
        self.touch();
    }

    pub fn polygon_style(&self) -> PolygonStyle {
        self.scene.borrow().material.polygon_style
    }

    pub fn set_polygon_style(&mut self, style: PolygonStyle) {
        self.scene.borrow_mut().material.polygon_style = style;
        self.touch();
    }

    /// Whether back faces are culled.
    pub fn backside(&self) -> bool {
        self.scene.borrow().material.backside
    }

    pub fn set_backside(&mut self, backside: bool) {
        self.scene.borrow_mut().material.backside = backside;
        self.touch();
    }

    pub fn color(&self) -> Rgb {
        self.scene.borrow().material.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.scene.borrow_mut().material.color = color;
        self.touch();
    }

    pub fn specular_color(&self) -> Rgb {
        self.scene.borrow().material.specular_color
    }

    pub fn set_specular_color(&mut self, color: Rgb) {
        self.scene.borrow_mut().material.specular_color = color;
        self.touch();
    }

    pub fn shininess(&self) -> f32 {
        self.scene.borrow().material.shininess
    }

    pub fn set_shininess(&mut self, shininess: f32) {
        self.scene.borrow_mut().material.shininess = shininess;
        self.touch();
    }

    pub fn opacity(&self) -> f32 {
        self.scene.borrow().material.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.scene.borrow_mut().material.opacity = opacity;
        self.touch();
    }

    pub fn background_color(&self) -> Rgb {
        self.scene.borrow().background
    }

    pub fn set_background_color(&mut self, color: Rgb) {
        self.scene.borrow_mut().background = color;
        self.touch();
    }

    pub fn shader_name(&self) -> String {
        self.scene.borrow().material.shader_name.clone()
    }

    /// Set the shader program name. Does not bump the revision counter; see
    /// the type-level docs.
    pub fn set_shader_name(&mut self, name: impl Into<String>) {
        self.scene.borrow_mut().material.shader_name = name.into();
    }

    // --- lights --------------------------------------------------------------

    pub fn lights(&self) -> &[LightDescriptor; LIGHT_SLOTS] {
        &self.lights
    }

    pub fn light(&self, slot: usize) -> &LightDescriptor {
        &self.lights[slot]
    }

    // --- decorative overlays -------------------------------------------------

    pub fn axis_scene(&self) -> Option<OverlayHandle> {
        self.axis_scene
    }

    /// Install or clear the axis overlay handle. Swapping the handle while
    /// the axis is shown replaces it in the overlay collection and keeps it
    /// visible; clearing the handle hides the axis.
    pub fn set_axis_scene(&mut self, handle: Option<OverlayHandle>) {
        if handle == self.axis_scene {
            return;
        }
        {
            let mut scene = self.scene.borrow_mut();
            if self.show_axis {
                if let Some(old) = self.axis_scene {
                    scene.overlays.remove(old);
                }
                if let Some(new) = handle {
                    scene.overlays.add(new);
                }
            }
        }
        self.axis_scene = handle;
        if handle.is_none() {
            self.show_axis = false;
        }
        self.touch();
    }

    pub fn show_axis(&self) -> bool {
        self.show_axis
    }

    /// Show or hide the axis overlay. Showing requires an installed axis
    /// handle; without one the call is ignored. No-op transitions leave the
    /// overlay collection untouched.
    pub fn set_show_axis(&mut self, show: bool) {
        if show == self.show_axis {
            return;
        }
        let Some(handle) = self.axis_scene else {
            return;
        };
        {
            let mut scene = self.scene.borrow_mut();
            if show {
                scene.overlays.add(handle);
            } else {
                scene.overlays.remove(handle);
            }
        }
        self.show_axis = show;
        self.touch();
    }

    pub fn compass(&self) -> OverlayHandle {
        self.compass
    }

    /// Compass visibility is membership of its handle in the overlay
    /// collection; there is no separate flag.
    pub fn show_compass(&self) -> bool {
        self.scene.borrow().overlays.contains(self.compass)
    }

    pub fn set_show_compass(&mut self, show: bool) {
        let changed = {
            let mut scene = self.scene.borrow_mut();
            if show {
                scene.overlays.add(self.compass)
            } else {
                scene.overlays.remove(self.compass)
            }
        };
        if changed {
            self.touch();
        }
    }

    pub fn ruler(&self) -> OverlayHandle {
        self.ruler
    }

    /// Ruler visibility is membership, like the compass.
    pub fn show_ruler(&self) -> bool {
        self.scene.borrow().overlays.contains(self.ruler)
    }

    pub fn set_show_ruler(&mut self, show: bool) {
        let changed = {
            let mut scene = self.scene.borrow_mut();
            if show {
                scene.overlays.add(self.ruler)
            } else {
                scene.overlays.remove(self.ruler)
            }
        };
        if changed {
            self.touch();
        }
    }

    // --- clip plane ----------------------------------------------------------

    /// Direction of the clip plane, or `None` when clipping is off.
    pub fn find_clip_plane(&self) -> Option<ClipDirection> {
        self.scene.borrow().clip_plane.map(|p| p.direction)
    }

    /// Create-or-fetch the clip plane; a fresh plane starts view-relative.
    pub fn clip_plane(&mut self) -> ClipDirection {
        let existing = self.scene.borrow().clip_plane;
        match existing {
            Some(plane) => plane.direction,
            None => {
                self.scene.borrow_mut().clip_plane = Some(ClipPlane::default());
                self.touch();
                ClipDirection::View
            }
        }
    }

    pub fn remove_clip_plane(&mut self) {
        if self.scene.borrow_mut().clip_plane.take().is_some() {
            self.touch();
        }
    }

    /// Point the clip plane along `direction`, creating the plane first if
    /// clipping is off. An existing plane is updated in place.
    pub fn set_clip_direction(&mut self, direction: ClipDirection) {
        let changed = {
            let mut scene = self.scene.borrow_mut();
            match scene.clip_plane.as_mut() {
                Some(plane) if plane.direction == direction => false,
                Some(plane) => {
                    plane.direction = direction;
                    true
                }
                None => {
                    scene.clip_plane = Some(ClipPlane::new(direction));
                    true
                }
            }
        };
        if changed {
            self.touch();
        }
    }

    pub fn clip_direction(&self) -> Option<ClipDirection> {
        self.find_clip_plane()
    }

    /// Toolbar semantics: clipping off turns it on with the default
    /// direction, clipping on removes the plane. Returns whether clipping is
    /// enabled afterwards.
    pub fn toggle_clip_plane(&mut self) -> bool {
        if self.find_clip_plane().is_some() {
            self.remove_clip_plane();
            false
        } else {
            self.clip_plane();
            true
        }
    }

    // --- view-operation bindings ---------------------------------------------

    pub fn operation(&self) -> &OperationSettings {
        &self.operation
    }

    pub fn set_operation(&mut self, operation: OperationSettings) {
        self.operation = operation;
        self.touch();
    }

    /// Install one gesture binding.
    pub fn bind(&mut self, binding: ViewOperationBinding) {
        self.operation.bind(binding);
        self.touch();
    }

    pub fn find_binding(&self, gesture: ViewGesture) -> Option<&ViewOperationBinding> {
        self.operation.find(gesture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewkit5_scene::DocumentViews;

    fn state() -> (DocumentViews, ViewState) {
        let views = DocumentViews::new();
        let state = ViewState::new(&views);
        (views, state)
    }

    #[test]
    fn test_setters_forward_into_scene_and_touch() {
        let (views, mut state) = state();
        let before = state.revision();

        state.set_perspective(false);
        state.set_opacity(0.5);
        state.set_color(Rgb::new(0.9, 0.1, 0.1));

        assert!(!views.scene().borrow().perspective);
        assert_eq!(views.scene().borrow().material.opacity, 0.5);
        assert_eq!(state.revision(), before + 3);
    }

    #[test]
    fn test_touch_monotonicity_per_mutator() {
        let (_views, mut state) = state();

        let mut last = state.revision();
        let mut assert_touched = |state: &ViewState| {
            assert!(state.revision() > last, "mutator did not touch");
            last = state.revision();
        };

        state.set_perspective(false);
        assert_touched(&state);
        state.set_polygon_style(PolygonStyle::FACE_EDGE);
        assert_touched(&state);
        state.set_backside(true);
        assert_touched(&state);
        state.set_color(Rgb::BLACK);
        assert_touched(&state);
        state.set_specular_color(Rgb::GRAY);
        assert_touched(&state);
        state.set_shininess(8.0);
        assert_touched(&state);
        state.set_opacity(0.25);
        assert_touched(&state);
        state.set_background_color(Rgb::WHITE);
        assert_touched(&state);
    }

    #[test]
    fn test_shader_name_does_not_touch() {
        let (views, mut state) = state();
        let before = state.revision();

        state.set_shader_name("toon");

        assert_eq!(state.revision(), before);
        assert_eq!(views.scene().borrow().material.shader_name, "toon");
    }

    #[test]
    fn test_compass_idempotence() {
        let (views, mut state) = state();

        state.set_show_compass(true);
        let rev = state.revision();
        state.set_show_compass(true);

        assert_eq!(views.scene().borrow().overlays.len(), 1);
        assert_eq!(state.revision(), rev, "no-op must not touch");

        state.set_show_compass(false);
        state.set_show_compass(false);
        assert!(views.scene().borrow().overlays.is_empty());
    }

    #[test]
    fn test_ruler_and_compass_are_independent() {
        let (_views, mut state) = state();

        state.set_show_compass(true);
        state.set_show_ruler(true);
        assert!(state.show_compass());
        assert!(state.show_ruler());

        state.set_show_compass(false);
        assert!(!state.show_compass());
        assert!(state.show_ruler());
    }

    #[test]
    fn test_show_axis_requires_handle() {
        let (_views, mut state) = state();

        state.set_show_axis(true);
        assert!(!state.show_axis());

        state.set_axis_scene(Some(OverlayHandle::new()));
        state.set_show_axis(true);
        assert!(state.show_axis());
    }

    #[test]
    fn test_axis_handle_swap_preserves_visibility() {
        let (views, mut state) = state();
        let a = OverlayHandle::new();
        let b = OverlayHandle::new();

        state.set_axis_scene(Some(a));
        state.set_show_axis(true);
        assert!(views.scene().borrow().overlays.contains(a));

        state.set_axis_scene(Some(b));

        let scene = views.scene().borrow();
        assert!(!scene.overlays.contains(a));
        assert!(scene.overlays.contains(b));
        drop(scene);
        assert!(state.show_axis());
    }

    #[test]
    fn test_clearing_axis_handle_hides_axis() {
        let (views, mut state) = state();
        let a = OverlayHandle::new();

        state.set_axis_scene(Some(a));
        state.set_show_axis(true);

        state.set_axis_scene(None);
        assert!(!state.show_axis());
        assert!(views.scene().borrow().overlays.is_empty());
    }

    #[test]
    fn test_clip_plane_toggle_round_trip() {
        let (_views, mut state) = state();

        assert_eq!(state.find_clip_plane(), None);

        assert!(state.toggle_clip_plane());
        assert_eq!(state.find_clip_plane(), Some(ClipDirection::View));

        assert!(!state.toggle_clip_plane());
        assert_eq!(state.find_clip_plane(), None);
    }

    #[test]
    fn test_clip_direction_updates_in_place() {
        let (_views, mut state) = state();

        state.clip_plane();
        state.set_clip_direction(ClipDirection::PlusZ);
        assert_eq!(state.clip_direction(), Some(ClipDirection::PlusZ));

        // Same direction again is a no-op
        let rev = state.revision();
        state.set_clip_direction(ClipDirection::PlusZ);
        assert_eq!(state.revision(), rev);
    }

    #[test]
    fn test_binding_lookup() {
        let (_views, state) = state();
        for gesture in ViewGesture::ALL {
            assert!(state.find_binding(gesture).is_some());
        }
    }
}
