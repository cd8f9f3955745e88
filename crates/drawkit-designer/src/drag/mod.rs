//! Pointer drags
//!
//! A drag is created on pointer-down, receives the pointer position on every
//! move, and is dropped on pointer-up. Edit drags hold a copy of the shape
//! as it was when the drag started and recompute the whole shape from that
//! copy and the latest pointer position, so no error accumulates over a long
//! drag. A create drag only remembers the latest position and builds its
//! shape once, when it is finished.

mod create;
mod dispatch;
mod edit;

pub use create::{create_shape, CreateDrag};
pub use dispatch::{begin_drag, DragStart};
pub use edit::{alt_click, control_click, ShapeEdit};

use drawkit_core::DragError;

use crate::angles::is_same_point;
use crate::model::{DesignerShape, Point, Shape, Size};

/// Where a drag started and what it grabbed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    /// Vertex or edge index, 0 for whole-shape drags
    pub index: usize,
    /// Pointer position at pointer-down
    pub start: Point,
    /// Position of the grabbed feature at pointer-down
    pub offset: Point,
}

impl DragOrigin {
    pub fn new(index: usize, start: Point, offset: Point) -> Self {
        Self {
            index,
            start,
            offset,
        }
    }

    /// Where the grabbed feature is after the pointer moved to `end`
    pub fn position(&self, end: Point) -> Point {
        self.offset + (end - self.start)
    }

    pub fn drag_center(&self, end: Point) -> Point {
        self.start.midpoint(&end)
    }

    /// Extent of the box spanned by the start and `end`
    pub fn size(&self, end: Point) -> Size {
        let d = end - self.start;
        Size::new(d.x.abs(), d.y.abs())
    }

    pub fn magnitude(&self, end: Point) -> f64 {
        (end - self.start).magnitude()
    }

    pub fn angle(&self, end: Point) -> f64 {
        (end - self.start).angle_degrees()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    EditPoint,
    RotatePoint,
    EditLine,
}

/// An in-progress edit of one shape in the list
#[derive(Debug, Clone)]
pub struct ShapeDrag {
    kind: DragKind,
    origin: DragOrigin,
    starting: Shape,
    target: usize,
    epsilon: f64,
}

impl ShapeDrag {
    /// Starts an edit of the shape stored at unordered index `target`.
    ///
    /// Point and line drags must grab an existing vertex or edge.
    pub fn new(
        kind: DragKind,
        origin: DragOrigin,
        starting: Shape,
        target: usize,
        epsilon: f64,
    ) -> Result<Self, DragError> {
        if kind != DragKind::Move {
            let count = starting.points().len();
            if origin.index >= count {
                return Err(DragError::PointIndexOutOfRange {
                    index: origin.index,
                    count,
                });
            }
        }

        tracing::debug!(
            "Starting {:?} drag on {} {} at {}",
            kind,
            starting.shape_type(),
            target,
            origin.start
        );

        Ok(Self {
            kind,
            origin,
            starting,
            target,
            epsilon,
        })
    }

    pub fn kind(&self) -> DragKind {
        self.kind
    }

    pub fn origin(&self) -> &DragOrigin {
        &self.origin
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn starting(&self) -> &Shape {
        &self.starting
    }

    /// The shape as it should look with the pointer at `end`
    pub fn make_shape(&self, end: Point) -> Shape {
        if is_same_point(end, self.origin.start, self.epsilon) {
            return self.starting.clone();
        }

        let origin = &self.origin;
        match self.kind {
            DragKind::Move => {
                let mut shape = self.starting.clone();
                shape.set_center(origin.position(end));
                shape
            }
            DragKind::EditPoint => edit::map_variant!(&self.starting, s => s.drag_point(origin, end)),
            DragKind::RotatePoint => {
                edit::map_variant!(&self.starting, s => s.rotate_point(origin, end))
            }
            DragKind::EditLine => edit::map_variant!(&self.starting, s => s.drag_line(origin, end)),
        }
    }
}

/// The one live drag of an editor
#[derive(Debug)]
pub enum Drag {
    Shape(ShapeDrag),
    Create(CreateDrag),
}

impl Drag {
    pub fn is_move(&self) -> bool {
        matches!(self, Drag::Shape(d) if d.kind() == DragKind::Move)
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Drag::Create(_))
    }
}
