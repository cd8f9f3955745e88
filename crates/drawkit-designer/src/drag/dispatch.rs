//! Choosing a drag from a pointer-down.
//!
//! The click is tested against the shape's vertices first, then its edges,
//! then its body. The first test that hits decides the drag, so a vertex
//! inside the body is always edited rather than the whole shape moved.

use drawkit_core::{DragError, Modifiers};
use drawkit_settings::InteractionSettings;

use super::{alt_click, DragKind, DragOrigin, ShapeDrag};
use crate::hit_test::find_point;
use crate::model::{DesignerShape, Point, Shape};
use crate::polygon_lines::PolygonLines;

/// Outcome of a pointer-down on one shape
#[derive(Debug)]
pub enum DragStart {
    /// The alt-click action changed the shape; no drag follows
    AltHandled,
    Drag(ShapeDrag),
    /// Nothing on this shape was hit
    Miss,
}

/// Picks and constructs the drag for a click on `shape`, which is stored at
/// unordered index `target`.
///
/// An alt-click edits `shape` in place and returns [`DragStart::AltHandled`].
pub fn begin_drag(
    shape: &mut Shape,
    target: usize,
    click: Point,
    modifiers: Modifiers,
    settings: &InteractionSettings,
) -> Result<DragStart, DragError> {
    let capabilities = shape.capabilities();
    let points = shape.points();
    let epsilon = settings.same_point_epsilon;

    if let Some(index) = find_point(click, &points, settings.hit_radius) {
        let origin = DragOrigin::new(index, click, points[index]);

        if modifiers.is_alt() && capabilities.alt_click && alt_click(shape, index) {
            tracing::debug!("Alt-click consumed by vertex {} of shape {}", index, target);
            return Ok(DragStart::AltHandled);
        }

        if modifiers.is_control() && capabilities.rotate {
            return start(DragKind::RotatePoint, origin, shape, target, epsilon);
        }

        if capabilities.edit_point {
            return start(DragKind::EditPoint, origin, shape, target, epsilon);
        }
    }

    if shape.is_closed() && capabilities.edit_line {
        let lines = PolygonLines::new(&points);
        if let Some(index) = lines.find(click, settings.hit_radius) {
            let offset = lines
                .segment(index)
                .map(|segment| segment.midpoint())
                .unwrap_or(click);
            let origin = DragOrigin::new(index, click, offset);
            return start(DragKind::EditLine, origin, shape, target, epsilon);
        }
    }

    if capabilities.drag && shape.contains_point(click, settings.contains_margin) {
        let origin = DragOrigin::new(0, click, shape.center());
        return start(DragKind::Move, origin, shape, target, epsilon);
    }

    Ok(DragStart::Miss)
}

fn start(
    kind: DragKind,
    origin: DragOrigin,
    shape: &Shape,
    target: usize,
    epsilon: f64,
) -> Result<DragStart, DragError> {
    ShapeDrag::new(kind, origin, shape.clone(), target, epsilon).map(DragStart::Drag)
}
