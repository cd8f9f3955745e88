use std::sync::Arc;

use drawkit_core::{EventBus, Key, Modifiers};
use drawkit_designer::editor::ShapeEditor;
use drawkit_designer::look::Look;
use drawkit_designer::model::{
    DesignPolygon, DesignQuad, DesignRegularPolygon, DesignerShape, Point, Shape, Size,
};
use drawkit_settings::Config;

fn editor_with(shape: Shape) -> ShapeEditor {
    let mut editor = ShapeEditor::new(&Config::default(), Arc::new(EventBus::new()));
    editor.shapes_mut().add(shape, Look::default());
    editor
}

fn drag(editor: &mut ShapeEditor, from: Point, to: Point) {
    editor.pointer_down(from, Modifiers::NONE).unwrap();
    editor.pointer_move(from.midpoint(&to), Modifiers::NONE).unwrap();
    editor.pointer_up(to, Modifiers::NONE).unwrap();
}

fn square() -> Shape {
    Shape::Polygon(DesignPolygon::new(&[
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ]))
}

fn assert_points(actual: &[Point], expected: &[Point]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!(a.distance_to(e) < 1e-9, "{} != {}", a, e);
    }
}

#[test]
fn test_move_keeps_the_grab_offset() {
    let mut editor = editor_with(square());
    drag(&mut editor, Point::new(40.0, 60.0), Point::new(140.0, 30.0));
    let shape = editor.shapes().shape(0).unwrap();
    assert!(shape.center().distance_to(&Point::new(150.0, 20.0)) < 1e-9);
}

#[test]
fn test_polygon_edge_follows_the_pointer() {
    let mut editor = editor_with(square());
    drag(&mut editor, Point::new(50.0, 1.0), Point::new(50.0, -19.0));
    assert_points(
        &editor.shapes().shape(0).unwrap().points(),
        &[
            Point::new(0.0, -20.0),
            Point::new(100.0, -20.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ],
    );
}

#[test]
fn test_polygon_vertex_follows_the_pointer() {
    let mut editor = editor_with(square());
    drag(&mut editor, Point::new(98.0, 98.0), Point::new(148.0, 118.0));
    let points = editor.shapes().shape(0).unwrap().points();
    assert!(points[2].distance_to(&Point::new(150.0, 120.0)) < 1e-9);
    assert!(points[0].distance_to(&Point::new(0.0, 0.0)) < 1e-9);
}

#[test]
fn test_quad_edge_drag_resizes_away_from_the_center() {
    let quad = DesignQuad::new(Point::ORIGIN, Size::new(100.0, 60.0));
    let mut editor = editor_with(Shape::Quad(quad));
    drag(&mut editor, Point::new(0.0, -32.0), Point::new(0.0, -52.0));

    match editor.shapes().shape(0) {
        Some(Shape::Quad(quad)) => {
            assert!((quad.size.height - 80.0).abs() < 1e-9);
            assert!((quad.size.width - 100.0).abs() < 1e-9);
            assert!(quad.center.distance_to(&Point::new(0.0, -10.0)) < 1e-9);
        }
        other => panic!("expected quad, got {:?}", other),
    }
}

#[test]
fn test_regular_polygon_vertex_sets_radius_and_rotation() {
    let hexagon = DesignRegularPolygon::new(Point::ORIGIN, 50.0, 6, 0.0);
    let vertex = hexagon.points()[0];
    let mut editor = editor_with(Shape::RegularPolygon(hexagon));
    drag(&mut editor, vertex, Point::new(80.0, 0.0));

    match editor.shapes().shape(0) {
        Some(Shape::RegularPolygon(shape)) => {
            assert!((shape.radius() - 80.0).abs() < 1e-9);
            assert!((shape.rotation - 30.0).abs() < 1e-9);
            assert!(shape.points()[0].distance_to(&Point::new(80.0, 0.0)) < 1e-9);
        }
        other => panic!("expected regular polygon, got {:?}", other),
    }
}

#[test]
fn test_escape_mid_drag_restores_the_shape() {
    let mut editor = editor_with(square());
    let before = editor.shapes().shape(0).cloned();

    editor.pointer_down(Point::new(50.0, 50.0), Modifiers::NONE).unwrap();
    editor.pointer_move(Point::new(90.0, 90.0), Modifiers::NONE).unwrap();
    assert_ne!(editor.shapes().shape(0).cloned(), before);

    assert!(editor.key_down(Key::Escape).unwrap());
    assert_eq!(editor.shapes().shape(0).cloned(), before);
    assert!(editor.drag().is_none());

    // The release after a cancel no longer edits anything
    editor.pointer_up(Point::new(120.0, 120.0), Modifiers::NONE).unwrap();
    assert_eq!(editor.shapes().shape(0).cloned(), before);
}

#[test]
fn test_disabling_keeps_the_edit_so_far() {
    let mut editor = editor_with(square());
    editor.pointer_down(Point::new(50.0, 50.0), Modifiers::NONE).unwrap();
    editor.pointer_move(Point::new(60.0, 50.0), Modifiers::NONE).unwrap();
    editor.set_enabled(false);

    assert!(editor.drag().is_none());
    let center = editor.shapes().shape(0).unwrap().center();
    assert!(center.distance_to(&Point::new(60.0, 50.0)) < 1e-9);

    // Input is ignored while disabled
    drag(&mut editor, Point::new(60.0, 50.0), Point::new(0.0, 0.0));
    let center = editor.shapes().shape(0).unwrap().center();
    assert!(center.distance_to(&Point::new(60.0, 50.0)) < 1e-9);
}

#[test]
fn test_delete_during_drag_removes_the_shape() {
    let mut editor = editor_with(square());
    editor.pointer_down(Point::new(50.0, 50.0), Modifiers::NONE).unwrap();
    editor.pointer_move(Point::new(70.0, 50.0), Modifiers::NONE).unwrap();
    assert!(editor.key_down(Key::Delete).unwrap());
    assert!(editor.shapes().is_empty());
    assert!(editor.drag().is_none());

    editor.pointer_up(Point::new(80.0, 50.0), Modifiers::NONE).unwrap();
    assert!(editor.shapes().is_empty());
}
