use std::sync::Arc;

use drawkit_core::{CreateMode, EventBus, Modifiers, ShapeKind};
use drawkit_designer::editor::ShapeEditor;
use drawkit_designer::look::{Look, Rgba};
use drawkit_designer::model::{Point, Shape};
use drawkit_settings::Config;

fn editor_with(config: Config) -> ShapeEditor {
    ShapeEditor::new(&config, Arc::new(EventBus::new()))
}

fn create(editor: &mut ShapeEditor, from: Point, to: Point) {
    editor.pointer_down(from, Modifiers::NONE).unwrap();
    editor.pointer_move(from.midpoint(&to), Modifiers::NONE).unwrap();
    editor.pointer_up(to, Modifiers::NONE).unwrap();
}

#[test]
fn test_every_kind_can_be_created() {
    let mut editor = editor_with(Config::default());
    let mut offset = 0.0;
    for kind in ShapeKind::ALL {
        editor.set_create_kind(kind);
        create(
            &mut editor,
            Point::new(offset, 500.0),
            Point::new(offset + 40.0, 530.0),
        );
        offset += 200.0;
    }

    let created: Vec<&'static str> = editor
        .shapes()
        .iter()
        .map(|(_, entry)| match entry.shape {
            Shape::Polygon(_) => "polygon",
            Shape::Quad(_) => "quad",
            Shape::Ellipse(_) => "ellipse",
            Shape::RegularPolygon(_) => "regular_polygon",
            Shape::Cross(_) => "cross",
            Shape::Edge(_) | Shape::Segments(_) => "other",
        })
        .collect();
    assert_eq!(
        created,
        vec!["polygon", "quad", "ellipse", "regular_polygon", "cross"]
    );
}

#[test]
fn test_created_shape_is_selected_and_on_top() {
    let mut editor = editor_with(Config::default());
    create(&mut editor, Point::new(0.0, 0.0), Point::new(50.0, 50.0));
    create(&mut editor, Point::new(200.0, 0.0), Point::new(250.0, 50.0));

    assert_eq!(editor.shapes().selected(), Some(1));
    assert_eq!(editor.shapes().ordered().indices(), &[0, 1]);
}

#[test]
fn test_selection_of_created_shapes_is_configurable() {
    let mut config = Config::default();
    config.creation.select_created = false;
    let mut editor = editor_with(config);
    create(&mut editor, Point::new(0.0, 0.0), Point::new(50.0, 50.0));
    assert_eq!(editor.shapes().len(), 1);
    assert_eq!(editor.shapes().selected(), None);
}

#[test]
fn test_replace_mode_from_config() {
    let mut config = Config::default();
    config.creation.mode = CreateMode::Replace;
    config.creation.default_shape = ShapeKind::Ellipse;
    let mut editor = editor_with(config);

    create(&mut editor, Point::new(0.0, 0.0), Point::new(50.0, 50.0));
    create(&mut editor, Point::new(300.0, 300.0), Point::new(340.0, 360.0));
    // A drag too small to create anything leaves the list alone
    create(&mut editor, Point::new(600.0, 600.0), Point::new(600.2, 600.2));

    assert_eq!(editor.shapes().len(), 1);
    match editor.shapes().shape(0) {
        Some(Shape::Ellipse(ellipse)) => {
            assert_eq!(ellipse.center, Point::new(320.0, 330.0));
            assert_eq!(ellipse.major, 40.0);
            assert_eq!(ellipse.minor, 60.0);
        }
        other => panic!("expected ellipse, got {:?}", other),
    }
}

#[test]
fn test_created_shapes_take_the_editor_look() {
    let mut editor = editor_with(Config::default());
    let look = Look::default().with_fill(Rgba::new(10, 20, 30, 255));
    editor.set_look(look);
    create(&mut editor, Point::new(0.0, 0.0), Point::new(50.0, 50.0));
    assert_eq!(editor.shapes().get(0).map(|e| e.look), Some(look));
}

#[test]
fn test_failed_creation_does_not_abort_pointer_up() {
    let mut editor = editor_with(Config::default());
    editor.pointer_down(Point::new(0.0, 0.0), Modifiers::NONE).unwrap();
    editor
        .pointer_up(Point::new(f64::NAN, 10.0), Modifiers::NONE)
        .unwrap();
    assert!(editor.shapes().is_empty());
    assert!(editor.drag().is_none());
}

#[test]
fn test_preview_tracks_the_pointer() {
    let mut editor = editor_with(Config::default());
    editor.set_create_kind(ShapeKind::Quad);
    editor.pointer_down(Point::new(0.0, 0.0), Modifiers::NONE).unwrap();
    assert!(editor.preview().is_none());
    editor.pointer_move(Point::new(30.0, 30.0), Modifiers::NONE).unwrap();
    assert!(matches!(editor.preview(), Some(Shape::Quad(_))));
    assert!(editor.shapes().is_empty());
}
