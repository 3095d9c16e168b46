//! UI-facing view surface controller.
//!
//! Sits between the widget layer and the view state: toolbar and menu
//! actions funnel through here into state mutations, and the rendering loop
//! polls [`ViewSurface::poll`] once per frame to learn whether anything
//! changed since the last repaint. Checked toolbar buttons read their state
//! through the `*_checked` queries instead of caching their own flags.

use crate::bindings::{ViewGesture, ViewOperationBinding};
use crate::state::ViewState;
use tracing::trace;
use viewkit5_core::{Rgb, Shared};
use viewkit5_scene::{ClipDirection, PolygonStyle};

/// Controller owning one view state reference on behalf of a viewport.
pub struct ViewSurface {
    state: Shared<ViewState>,
    last_seen: u64,
    repaint_listeners: Vec<Box<dyn Fn()>>,
}

impl ViewSurface {
    pub fn new(state: Shared<ViewState>) -> Self {
        let last_seen = state.borrow().revision();
        Self {
            state,
            last_seen,
            repaint_listeners: Vec::new(),
        }
    }

    /// The view state this surface presents.
    pub fn state(&self) -> &Shared<ViewState> {
        &self.state
    }

    /// Register a callback fired whenever the surface decides to repaint.
    pub fn on_repaint<F: Fn() + 'static>(&mut self, callback: F) {
        self.repaint_listeners.push(Box::new(callback));
    }

    /// Frame-driven dirty check: true when the state's revision moved since
    /// the last poll. Fires the repaint listeners on a hit.
    pub fn poll(&mut self) -> bool {
        let revision = self.state.borrow().revision();
        if revision == self.last_seen {
            return false;
        }
        trace!(revision, "view state changed, repainting");
        self.last_seen = revision;
        self.invalidate();
        true
    }

    /// Force a repaint regardless of the revision counter.
    pub fn invalidate(&self) {
        for listener in &self.repaint_listeners {
            listener();
        }
    }

    // --- toolbar/menu actions ------------------------------------------------

    pub fn toggle_perspective(&self) {
        let mut state = self.state.borrow_mut();
        let perspective = !state.perspective();
        state.set_perspective(perspective);
    }

    pub fn perspective_checked(&self) -> bool {
        self.state.borrow().perspective()
    }

    /// Switch to face-only drawing.
    pub fn show_faces(&self) {
        self.state.borrow_mut().set_polygon_style(PolygonStyle::FACE);
    }

    /// Switch to edge-only drawing.
    pub fn show_edges(&self) {
        self.state.borrow_mut().set_polygon_style(PolygonStyle::EDGE);
    }

    /// Switch to faces with edges on top.
    pub fn show_faces_and_edges(&self) {
        self.state
            .borrow_mut()
            .set_polygon_style(PolygonStyle::FACE_EDGE);
    }

    /// Checked state of the face-only button: a projection of the stored
    /// bitset, exclusive against the other two buttons.
    pub fn faces_checked(&self) -> bool {
        self.state.borrow().polygon_style() == PolygonStyle::FACE
    }

    pub fn edges_checked(&self) -> bool {
        self.state.borrow().polygon_style() == PolygonStyle::EDGE
    }

    pub fn faces_and_edges_checked(&self) -> bool {
        self.state.borrow().polygon_style() == PolygonStyle::FACE_EDGE
    }

    pub fn toggle_backside(&self) {
        let mut state = self.state.borrow_mut();
        let backside = !state.backside();
        state.set_backside(backside);
    }

    pub fn toggle_axis(&self) {
        let mut state = self.state.borrow_mut();
        let show = !state.show_axis();
        state.set_show_axis(show);
    }

    pub fn axis_checked(&self) -> bool {
        self.state.borrow().show_axis()
    }

    pub fn toggle_compass(&self) {
        let mut state = self.state.borrow_mut();
        let show = !state.show_compass();
        state.set_show_compass(show);
    }

    pub fn compass_checked(&self) -> bool {
        self.state.borrow().show_compass()
    }

    pub fn toggle_ruler(&self) {
        let mut state = self.state.borrow_mut();
        let show = !state.show_ruler();
        state.set_show_ruler(show);
    }

    pub fn ruler_checked(&self) -> bool {
        self.state.borrow().show_ruler()
    }

    /// Clip toolbar button: off creates a view-relative plane, on removes
    /// it. Returns whether clipping is enabled afterwards.
    pub fn toggle_clip_plane(&self) -> bool {
        self.state.borrow_mut().toggle_clip_plane()
    }

    pub fn clip_checked(&self) -> bool {
        self.state.borrow().find_clip_plane().is_some()
    }

    pub fn set_clip_direction(&self, direction: ClipDirection) {
        self.state.borrow_mut().set_clip_direction(direction);
    }

    pub fn set_background_color(&self, color: Rgb) {
        self.state.borrow_mut().set_background_color(color);
    }

    /// Resolve the binding the input layer should use for a gesture.
    pub fn binding(&self, gesture: ViewGesture) -> Option<ViewOperationBinding> {
        self.state.borrow().find_binding(gesture).copied()
    }
}
