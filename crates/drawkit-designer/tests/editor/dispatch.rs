use std::sync::Arc;

use drawkit_core::{EventBus, Modifiers};
use drawkit_designer::drag::{Drag, DragKind};
use drawkit_designer::editor::ShapeEditor;
use drawkit_designer::look::Look;
use drawkit_designer::model::{DesignPolygon, DesignerShape, Point, Shape};
use drawkit_settings::Config;

fn square() -> Shape {
    Shape::Polygon(DesignPolygon::new(&[
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ]))
}

fn editor_with_square() -> ShapeEditor {
    let mut editor = ShapeEditor::new(&Config::default(), Arc::new(EventBus::new()));
    editor.shapes_mut().add(square(), Look::default());
    editor
}

fn live_kind(editor: &ShapeEditor) -> Option<DragKind> {
    match editor.drag() {
        Some(Drag::Shape(drag)) => Some(drag.kind()),
        _ => None,
    }
}

#[test]
fn test_priority_point_line_body() {
    let mut editor = editor_with_square();

    editor.pointer_down(Point::new(3.0, 4.0), Modifiers::NONE).unwrap();
    assert_eq!(live_kind(&editor), Some(DragKind::EditPoint));
    editor.pointer_up(Point::new(3.0, 4.0), Modifiers::NONE).unwrap();

    editor.pointer_down(Point::new(50.0, 4.0), Modifiers::NONE).unwrap();
    assert_eq!(live_kind(&editor), Some(DragKind::EditLine));
    editor.pointer_up(Point::new(50.0, 4.0), Modifiers::NONE).unwrap();

    editor.pointer_down(Point::new(50.0, 50.0), Modifiers::NONE).unwrap();
    assert_eq!(live_kind(&editor), Some(DragKind::Move));
    editor.pointer_up(Point::new(50.0, 50.0), Modifiers::NONE).unwrap();

    editor.pointer_down(Point::new(400.0, 400.0), Modifiers::NONE).unwrap();
    assert!(editor.drag().is_some_and(|d| d.is_create()));
}

#[test]
fn test_click_selects_the_shape() {
    let mut editor = editor_with_square();
    assert_eq!(editor.shapes().selected(), None);
    editor.pointer_down(Point::new(50.0, 50.0), Modifiers::NONE).unwrap();
    assert_eq!(editor.shapes().selected(), Some(0));
}

#[test]
fn test_unchanged_release_keeps_the_shape() {
    let mut editor = editor_with_square();
    let before = editor.shapes().shape(0).cloned();
    editor.pointer_down(Point::new(50.0, 50.0), Modifiers::NONE).unwrap();
    editor.pointer_up(Point::new(50.0, 50.0), Modifiers::NONE).unwrap();
    assert_eq!(editor.shapes().shape(0).cloned(), before);
}

#[test]
fn test_control_on_vertex_rotates() {
    let mut editor = editor_with_square();
    editor.pointer_down(Point::new(99.0, 99.0), Modifiers::CONTROL).unwrap();
    assert_eq!(live_kind(&editor), Some(DragKind::RotatePoint));
}

#[test]
fn test_alt_click_removes_vertices_down_to_three() {
    let mut editor = editor_with_square();

    editor.pointer_down(Point::new(0.0, 0.0), Modifiers::ALT).unwrap();
    assert!(editor.drag().is_none());
    assert_eq!(editor.shapes().shape(0).unwrap().points().len(), 3);
    editor.pointer_up(Point::new(0.0, 0.0), Modifiers::ALT).unwrap();

    // A triangle cannot lose a vertex, so the click edits the point instead
    editor.pointer_down(Point::new(99.0, 99.0), Modifiers::ALT).unwrap();
    assert_eq!(live_kind(&editor), Some(DragKind::EditPoint));
    assert_eq!(editor.shapes().shape(0).unwrap().points().len(), 3);
}

#[test]
fn test_hit_radius_is_in_device_units() {
    let mut editor = editor_with_square();
    editor.pointer_down(Point::new(6.0, 6.0), Modifiers::NONE).unwrap();
    assert_eq!(live_kind(&editor), Some(DragKind::EditPoint));
    editor.pointer_up(Point::new(6.0, 6.0), Modifiers::NONE).unwrap();

    // At 2x the same logical position is 12 device units from the vertex
    editor.viewport_mut().set_zoom(2.0);
    editor.pointer_down(Point::new(12.0, 12.0), Modifiers::NONE).unwrap();
    assert_eq!(live_kind(&editor), Some(DragKind::Move));
}

#[test]
fn test_topmost_shape_wins() {
    let mut editor = editor_with_square();
    let top = editor.shapes_mut().add(square(), Look::default());
    editor.pointer_down(Point::new(50.0, 50.0), Modifiers::NONE).unwrap();
    match editor.drag() {
        Some(Drag::Shape(drag)) => assert_eq!(drag.target(), top),
        other => panic!("expected a shape drag, got {:?}", other),
    }
}
