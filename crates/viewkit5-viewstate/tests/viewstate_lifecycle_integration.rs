//! View state lifecycle integration tests

use viewkit5_scene::{ClipDirection, DocumentViews, OverlayHandle, PolygonStyle};
use viewkit5_settings::view_path;
use viewkit5_viewstate::{ViewRecord, ViewStateRegistry, ViewSurface};

#[test]
fn test_view_state_complete_workflow() {
    let mut registry = ViewStateRegistry::new();
    let views = DocumentViews::new();

    // Open a surface over the group's state
    let state = registry.get(&views);
    let mut surface = ViewSurface::new(state.clone());
    assert!(!surface.poll());

    // Edit through the surface like a toolbar would
    surface.toggle_perspective();
    surface.show_faces_and_edges();
    surface.toggle_compass();
    assert!(surface.toggle_clip_plane());
    surface.set_clip_direction(ClipDirection::MinusZ);
    assert!(surface.poll());

    assert!(!state.borrow().perspective());
    assert_eq!(state.borrow().polygon_style(), PolygonStyle::FACE_EDGE);
    assert!(surface.compass_checked());
    assert_eq!(state.borrow().clip_direction(), Some(ClipDirection::MinusZ));

    // Install the axis overlay and enable it
    state
        .borrow_mut()
        .set_axis_scene(Some(OverlayHandle::new()));
    surface.toggle_axis();
    assert!(surface.axis_checked());
    assert!(surface.poll());

    // Save as the shared default, then confirm a fresh group inherits it
    registry.save(views.id());
    let other = DocumentViews::new();
    let other_state = registry.get(&other);
    assert!(!other_state.borrow().perspective());
    assert!(other_state.borrow().show_compass());
    assert_eq!(
        other_state.borrow().clip_direction(),
        Some(ClipDirection::MinusZ)
    );

    // Restore stomps later edits
    other_state.borrow_mut().set_perspective(true);
    registry.restore(&other);
    assert!(!other_state.borrow().perspective());

    // Release the first group; its handle stays usable but is forgotten
    assert!(registry.release(views.id()));
    assert!(registry.find(views.id()).is_none());
    assert!(state.borrow().show_compass());
}

#[test]
fn test_named_view_folder_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    // Author a view in one registry and store it in a named folder
    let mut authoring = ViewStateRegistry::new();
    let views = DocumentViews::new();
    {
        let state = authoring.get(&views);
        let mut state = state.borrow_mut();
        state.set_polygon_style(PolygonStyle::EDGE);
        state.set_show_ruler(true);
        state.light(2).set_enabled(true);
    }
    let record = ViewRecord::capture(&authoring.get(&views).borrow());
    record.save_to_file(&view_path(dir.path())).unwrap();

    // A different session loads it onto a new group
    let mut session = ViewStateRegistry::new();
    let other = DocumentViews::new();
    session.load_from(&other, dir.path()).unwrap();

    let state = session.get(&other);
    assert_eq!(state.borrow().polygon_style(), PolygonStyle::EDGE);
    assert!(state.borrow().show_ruler());
    assert!(state.borrow().light(2).enabled());
}

#[test]
fn test_default_record_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view_default.toml");

    let mut first = ViewStateRegistry::new();
    let views = DocumentViews::new();
    first
        .get(&views)
        .borrow_mut()
        .set_polygon_style(PolygonStyle::FACE_EDGE);
    first.save(views.id());
    first.save_default_to(&path).unwrap();

    let mut second = ViewStateRegistry::new();
    second.load_default_from(&path).unwrap();
    let state = second.get(&DocumentViews::new());
    assert_eq!(state.borrow().polygon_style(), PolygonStyle::FACE_EDGE);
}
