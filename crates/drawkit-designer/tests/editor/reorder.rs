use std::sync::Arc;

use drawkit_core::{CursorKind, EditorEvent, EventBus, EventCategory, EventFilter, Modifiers};
use drawkit_designer::editor::ShapeEditor;
use drawkit_designer::look::Look;
use drawkit_designer::model::{DesignCross, DesignPolygon, Point, Shape};
use drawkit_settings::Config;
use parking_lot::Mutex;

fn square(offset: f64) -> Shape {
    Shape::Polygon(DesignPolygon::new(&[
        Point::new(offset, offset),
        Point::new(offset + 100.0, offset),
        Point::new(offset + 100.0, offset + 100.0),
        Point::new(offset, offset + 100.0),
    ]))
}

fn editor() -> ShapeEditor {
    ShapeEditor::new(&Config::default(), Arc::new(EventBus::new()))
}

#[test]
fn test_z_order_decides_which_shape_is_grabbed() {
    let mut editor = editor();
    let bottom = editor.shapes_mut().add(square(0.0), Look::default());
    let top = editor.shapes_mut().add(square(50.0), Look::default());

    editor.pointer_down(Point::new(75.0, 75.0), Modifiers::NONE).unwrap();
    editor.pointer_up(Point::new(75.0, 75.0), Modifiers::NONE).unwrap();
    assert_eq!(editor.shapes().selected(), Some(top));

    editor.shapes_mut().move_up(bottom).unwrap();
    editor.pointer_down(Point::new(75.0, 75.0), Modifiers::NONE).unwrap();
    editor.pointer_up(Point::new(75.0, 75.0), Modifiers::NONE).unwrap();
    assert_eq!(editor.shapes().selected(), Some(bottom));
}

#[test]
fn test_queued_requests_apply_on_process() {
    let mut editor = editor();
    for i in 0..3 {
        editor
            .shapes_mut()
            .add(Shape::Cross(DesignCross::new(Point::new(i as f64 * 100.0, 0.0), 20.0, 0.0)), Look::default());
    }

    editor.shapes().request_move_down(2);
    editor.shapes().request_move_down(2);
    assert_eq!(editor.shapes().ordered().indices(), &[0, 1, 2]);

    assert_eq!(editor.shapes_mut().process_requests(), 2);
    assert_eq!(editor.shapes().ordered().indices(), &[2, 0, 1]);
}

#[test]
fn test_deleting_keeps_requests_wired() {
    let mut editor = editor();
    for offset in [0.0, 200.0, 400.0] {
        editor.shapes_mut().add(square(offset), Look::default());
    }
    editor.shapes_mut().select(0).unwrap();
    assert!(editor.key_down(drawkit_core::Key::Delete).unwrap());

    // The old index 2 is now 1
    editor.shapes().request_move_down(1);
    editor.shapes_mut().process_requests();
    assert_eq!(editor.shapes().ordered().indices(), &[1, 0]);
    assert_eq!(editor.shapes().ordered().connection_count(), 2);
}

#[test]
fn test_cursor_changes_are_published() {
    let bus = Arc::new(EventBus::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    bus.subscribe(
        EventFilter::Categories(vec![EventCategory::Cursor]),
        move |event| log.lock().push(event),
    );

    let mut editor = ShapeEditor::new(&Config::default(), Arc::clone(&bus));
    editor.shapes_mut().add(square(0.0), Look::default());

    editor.pointer_move(Point::new(50.0, 50.0), Modifiers::NONE).unwrap();
    editor.pointer_move(Point::new(55.0, 50.0), Modifiers::NONE).unwrap();
    editor.pointer_move(Point::new(500.0, 500.0), Modifiers::NONE).unwrap();

    assert_eq!(
        *seen.lock(),
        vec![
            EditorEvent::Cursor(CursorKind::OpenHand),
            EditorEvent::Cursor(CursorKind::Arrow),
        ]
    );
}
