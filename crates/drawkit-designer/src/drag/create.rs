//! Create drags and the factories behind them.

use drawkit_core::{DragError, ShapeKind};

use super::DragOrigin;
use crate::model::{
    DesignCross, DesignEllipse, DesignPolygon, DesignQuad, DesignRegularPolygon, Point, Shape,
};
use crate::polygon_lines::PolygonLines;

/// Builds a shape of `kind` from a drag that started at `origin.start` and
/// ended at `end`.
///
/// Returns `Ok(None)` when the drag is too small to produce a shape.
/// Box-shaped kinds measure the spanned area, radial kinds the distance
/// from the start.
pub fn create_shape(
    kind: ShapeKind,
    origin: &DragOrigin,
    end: Point,
    min_extent: f64,
) -> Result<Option<Shape>, DragError> {
    if !end.is_finite() || !origin.start.is_finite() {
        return Err(DragError::CreationFailed {
            reason: format!("pointer position {} is not finite", end),
        });
    }

    let size = origin.size(end);
    let center = origin.drag_center(end);
    let magnitude = origin.magnitude(end);

    let shape = match kind {
        ShapeKind::Polygon => {
            if size.area() < min_extent {
                return Ok(None);
            }
            let mut polygon = DesignPolygon::new(&PolygonLines::rectangle(size).points());
            polygon.center = center;
            Shape::Polygon(polygon)
        }
        ShapeKind::Quad => {
            if size.area() < min_extent {
                return Ok(None);
            }
            Shape::Quad(DesignQuad::new(center, size))
        }
        ShapeKind::Ellipse => {
            if size.area() < min_extent {
                return Ok(None);
            }
            Shape::Ellipse(DesignEllipse::new(center, size.width, size.height))
        }
        ShapeKind::RegularPolygon => {
            if magnitude < min_extent {
                return Ok(None);
            }
            Shape::RegularPolygon(DesignRegularPolygon::new(
                origin.start,
                magnitude,
                3,
                origin.angle(end),
            ))
        }
        ShapeKind::Cross => {
            if magnitude < min_extent {
                return Ok(None);
            }
            Shape::Cross(DesignCross::new(
                origin.start,
                2.0 * magnitude,
                origin.angle(end),
            ))
        }
    };

    Ok(Some(shape))
}

/// Drag on empty canvas that produces a new shape when finished
#[derive(Debug, Clone)]
pub struct CreateDrag {
    kind: ShapeKind,
    origin: DragOrigin,
    latest: Point,
    min_extent: f64,
}

impl CreateDrag {
    pub fn new(kind: ShapeKind, start: Point, min_extent: f64) -> Self {
        tracing::debug!("Starting create drag for {} at {}", kind, start);
        Self {
            kind,
            origin: DragOrigin::new(0, start, start),
            latest: start,
            min_extent,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn start(&self) -> Point {
        self.origin.start
    }

    pub fn report_position(&mut self, position: Point) {
        tracing::trace!("Create drag at {}", position);
        self.latest = position;
    }

    /// Shape the drag would create right now, for rubber-band drawing
    pub fn preview(&self) -> Option<Shape> {
        create_shape(self.kind, &self.origin, self.latest, self.min_extent)
            .ok()
            .flatten()
    }

    /// Consumes the drag and makes its single commit-or-drop decision
    pub fn finish(self) -> Result<Option<Shape>, DragError> {
        let created = create_shape(self.kind, &self.origin, self.latest, self.min_extent)?;
        match &created {
            Some(shape) => tracing::debug!("Created {}", shape.shape_type()),
            None => tracing::debug!("Create drag too small, nothing created"),
        }
        Ok(created)
    }
}
