//! Per-variant edit behaviour.
//!
//! Every shape variant declares the edits it accepts in
//! [`ShapeEdit::CAPABILITIES`] and overrides the matching methods. The
//! methods are pure: they take the shape as it was when the drag started and
//! return the shape for the current pointer position.

use drawkit_core::GeometryError;

use super::DragOrigin;
use crate::angles::{adjust_rotation, angle_between, angle_difference};
use crate::line::Segment;
use crate::model::{
    DesignCross, DesignEdge, DesignEllipse, DesignPolygon, DesignQuad, DesignRegularPolygon,
    DesignSegments, DesignerShape, Point, Shape, ShapeCapabilities,
};
use crate::polygon_lines::PolygonLines;

/// Applies `$body` to the variant inside `$shape` and rewraps the result.
macro_rules! map_variant {
    ($shape:expr, $s:ident => $body:expr) => {
        match $shape {
            $crate::model::Shape::Polygon($s) => $crate::model::Shape::Polygon($body),
            $crate::model::Shape::Quad($s) => $crate::model::Shape::Quad($body),
            $crate::model::Shape::Ellipse($s) => $crate::model::Shape::Ellipse($body),
            $crate::model::Shape::RegularPolygon($s) => {
                $crate::model::Shape::RegularPolygon($body)
            }
            $crate::model::Shape::Cross($s) => $crate::model::Shape::Cross($body),
            $crate::model::Shape::Edge($s) => $crate::model::Shape::Edge($body),
            $crate::model::Shape::Segments($s) => $crate::model::Shape::Segments($body),
        }
    };
}

pub(crate) use map_variant;

/// Minimum pointer travel before a polygon vertex follows the pointer
const POLYGON_DRAG_THRESHOLD: f64 = 1.0;

pub trait ShapeEdit: DesignerShape + Clone {
    const CAPABILITIES: ShapeCapabilities;

    /// Vertex `drag.index` was grabbed and the pointer is now at `end`
    fn drag_point(&self, _drag: &DragOrigin, _end: Point) -> Self {
        self.clone()
    }

    /// Vertex `drag.index` was grabbed with Control held
    fn rotate_point(&self, _drag: &DragOrigin, _end: Point) -> Self {
        self.clone()
    }

    /// Edge `drag.index` was grabbed
    fn drag_line(&self, _drag: &DragOrigin, _end: Point) -> Self {
        self.clone()
    }

    /// Alt-click on vertex `index`; returns whether the click was consumed
    fn alt_click(&mut self, _index: usize) -> bool {
        false
    }

    /// Control-click at `click` away from the shape; returns whether the
    /// click was consumed
    fn control_click(&mut self, _click: Point) -> bool {
        false
    }
}

/// Runs the variant's alt-click action on vertex `index`
pub fn alt_click(shape: &mut Shape, index: usize) -> bool {
    match shape {
        Shape::Polygon(s) => s.alt_click(index),
        Shape::Quad(s) => s.alt_click(index),
        Shape::Ellipse(s) => s.alt_click(index),
        Shape::RegularPolygon(s) => s.alt_click(index),
        Shape::Cross(s) => s.alt_click(index),
        Shape::Edge(s) => s.alt_click(index),
        Shape::Segments(s) => s.alt_click(index),
    }
}

/// Runs the variant's control-click action at `click`
pub fn control_click(shape: &mut Shape, click: Point) -> bool {
    match shape {
        Shape::Polygon(s) => s.control_click(click),
        Shape::Quad(s) => s.control_click(click),
        Shape::Ellipse(s) => s.control_click(click),
        Shape::RegularPolygon(s) => s.control_click(click),
        Shape::Cross(s) => s.control_click(click),
        Shape::Edge(s) => s.control_click(click),
        Shape::Segments(s) => s.control_click(click),
    }
}

fn grabbed(points: &[Point], drag: &DragOrigin) -> Point {
    points.get(drag.index).copied().unwrap_or(drag.offset)
}

impl ShapeEdit for DesignPolygon {
    const CAPABILITIES: ShapeCapabilities = ShapeCapabilities {
        edit_point: true,
        edit_line: true,
        rotate: true,
        drag: true,
        alt_click: true,
        control_click: true,
    };

    /// Moves one vertex and re-centers the polygon on the new outline
    fn drag_point(&self, drag: &DragOrigin, end: Point) -> Self {
        if drag.magnitude(end) < POLYGON_DRAG_THRESHOLD {
            return self.clone();
        }

        let mut points = self.points();
        match points.get_mut(drag.index) {
            Some(point) => *point = drag.position(end),
            None => return self.clone(),
        }
        DesignPolygon::new(&points)
    }

    fn rotate_point(&self, drag: &DragOrigin, end: Point) -> Self {
        let mut polygon = self.clone();
        polygon.rotation = adjust_rotation(self.rotation, self.center, drag.offset, end);
        polygon
    }

    /// Slides one edge to follow the pointer; its neighbours stretch
    fn drag_line(&self, drag: &DragOrigin, end: Point) -> Self {
        let mut lines = PolygonLines::new(&self.points());
        match lines.line_mut(drag.index) {
            Some(line) => line.point = drag.position(end),
            None => return self.clone(),
        }
        DesignPolygon::new(&lines.points())
    }

    /// Deletes the vertex while at least three would remain
    fn alt_click(&mut self, index: usize) -> bool {
        if self.points.len() < 4 || index >= self.points.len() {
            return false;
        }
        self.points.remove(index);
        tracing::debug!("Removed polygon vertex {}", index);
        true
    }

    /// Inserts `click` as a vertex into the nearest edge
    fn control_click(&mut self, click: Point) -> bool {
        if self.scale == 0.0 {
            return false;
        }
        let local = (click - self.center).rotated(-self.rotation) / self.scale;
        let absolute = self.points();
        let count = absolute.len();

        let nearest = (0..count)
            .map(|i| {
                let segment = Segment::new(absolute[i], absolute[(i + 1) % count]);
                (i, segment.distance_to_point(click))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));

        match nearest {
            Some((i, _)) if count >= 2 => self.points.insert(i + 1, local),
            _ => self.points.push(local),
        }
        tracing::debug!("Inserted polygon vertex at {}", click);
        true
    }
}

/// Corner drag anchors: (horizontal neighbour, vertical neighbour,
/// horizontal flip, vertical flip)
const QUAD_ANCHORS: [(usize, usize, f64, f64); 4] = [
    (1, 3, 1.0, 1.0),
    (0, 2, 1.0, -1.0),
    (3, 1, -1.0, -1.0),
    (2, 0, -1.0, 1.0),
];

/// Side length below which a shear drag is ignored
const QUAD_MIN_SIDE: f64 = 1e-9;

impl DesignQuad {
    fn try_drag_line(&self, drag: &DragOrigin, end: Point) -> Result<Self, GeometryError> {
        let line = self.side(drag.index)?;
        let motion = end - drag.start;
        let magnitude = motion.magnitude();
        let relative = (motion.angle_degrees() - line.angle_degrees()).to_radians();
        let parallel = magnitude * relative.cos();
        let perpendicular = -magnitude * relative.sin();

        let mut quad = self.clone();
        let horizontal = drag.index % 2 == 0;

        if parallel.abs() > perpendicular.abs() {
            let side_length = line.direction.magnitude();
            if side_length < QUAD_MIN_SIDE {
                return Ok(quad);
            }
            let adjustment = parallel / side_length;
            if horizontal {
                quad.shear.x = (quad.shear.x - adjustment)
                    .clamp(-DesignQuad::SHEAR_LIMIT, DesignQuad::SHEAR_LIMIT);
            } else {
                quad.shear.y = (quad.shear.y + adjustment)
                    .clamp(-DesignQuad::SHEAR_LIMIT, DesignQuad::SHEAR_LIMIT);
            }
            return Ok(quad);
        }

        if self.scale == 0.0 {
            return Ok(quad);
        }

        let current = if horizontal {
            self.size.height
        } else {
            self.size.width
        };
        let adjustment = perpendicular.max((1.0 - current) * self.scale);
        let local = (adjustment / self.scale).round();
        if horizontal {
            quad.size.height += local;
        } else {
            quad.size.width += local;
        }

        let outward = line.direction.normalized().rotated(-90.0);
        quad.center += outward * (adjustment / 2.0);
        Ok(quad)
    }
}

impl ShapeEdit for DesignQuad {
    const CAPABILITIES: ShapeCapabilities = ShapeCapabilities {
        edit_point: true,
        edit_line: true,
        rotate: true,
        drag: true,
        alt_click: false,
        control_click: false,
    };

    /// Tilts the two edges meeting at the corner, changing perspective
    fn drag_point(&self, drag: &DragOrigin, end: Point) -> Self {
        let Some(&(h, v, h_flip, v_flip)) = QUAD_ANCHORS.get(drag.index) else {
            return self.clone();
        };

        let points = self.points();
        let point = points[drag.index];
        let limit = DesignQuad::PERSPECTIVE_LIMIT;

        let tilt = |anchor: Point| {
            angle_difference((end - anchor).angle_degrees(), (point - anchor).angle_degrees())
        };

        let mut quad = self.clone();
        quad.perspective.x = (self.perspective.x + 2.0 * h_flip * tilt(points[h])).clamp(-limit, limit);
        quad.perspective.y = (self.perspective.y + 2.0 * v_flip * tilt(points[v])).clamp(-limit, limit);
        quad
    }

    fn rotate_point(&self, drag: &DragOrigin, end: Point) -> Self {
        let mut quad = self.clone();
        let reference = grabbed(&self.points(), drag);
        quad.rotation = adjust_rotation(self.rotation, self.center, reference, end);
        quad
    }

    /// Motion along the edge shears the quad, motion across it resizes
    fn drag_line(&self, drag: &DragOrigin, end: Point) -> Self {
        self.try_drag_line(drag, end).unwrap_or_else(|e| {
            tracing::warn!("Ignoring quad line drag: {}", e);
            self.clone()
        })
    }
}

impl ShapeEdit for DesignEllipse {
    const CAPABILITIES: ShapeCapabilities = ShapeCapabilities {
        edit_point: true,
        edit_line: false,
        rotate: true,
        drag: true,
        alt_click: false,
        control_click: false,
    };

    /// Turns the ellipse towards the pointer and stretches the grabbed axis
    fn drag_point(&self, drag: &DragOrigin, end: Point) -> Self {
        let position = drag.position(end);
        let mut ellipse = self.rotate_point(drag, end);
        ellipse.edit_point(position, drag.index);
        ellipse
    }

    fn rotate_point(&self, drag: &DragOrigin, end: Point) -> Self {
        let mut ellipse = self.clone();
        ellipse.rotation =
            adjust_rotation(self.rotation, self.center, drag.offset, drag.position(end));
        ellipse
    }
}

impl ShapeEdit for DesignRegularPolygon {
    const CAPABILITIES: ShapeCapabilities = ShapeCapabilities {
        edit_point: true,
        edit_line: true,
        rotate: true,
        drag: true,
        alt_click: false,
        control_click: false,
    };

    /// The grabbed vertex follows the pointer: both radius and rotation
    fn drag_point(&self, drag: &DragOrigin, end: Point) -> Self {
        let position = drag.position(end);
        let mut shape =
            self.rotate_deg(angle_between(drag.offset - self.center, position - self.center));
        shape.set_radius(self.center.distance_to(&position));
        shape
    }

    fn rotate_point(&self, drag: &DragOrigin, end: Point) -> Self {
        let mut shape = self.clone();
        shape.rotation =
            adjust_rotation(self.rotation, self.center, drag.offset, drag.position(end));
        shape
    }

    /// The grabbed side follows the pointer: apothem and rotation
    fn drag_line(&self, drag: &DragOrigin, end: Point) -> Self {
        let position = drag.position(end);
        let mut shape =
            self.rotate_deg(angle_between(drag.start - self.center, end - self.center));
        shape.set_midpoint_radius(self.center.distance_to(&position));
        shape
    }
}

impl ShapeEdit for DesignCross {
    const CAPABILITIES: ShapeCapabilities = ShapeCapabilities {
        edit_point: true,
        edit_line: false,
        rotate: true,
        drag: true,
        alt_click: false,
        control_click: false,
    };

    fn drag_point(&self, drag: &DragOrigin, end: Point) -> Self {
        let position = drag.position(end);
        DesignCross::new(
            self.center,
            2.0 * self.center.distance_to(&position),
            self.rotation,
        )
    }

    fn rotate_point(&self, drag: &DragOrigin, end: Point) -> Self {
        let mut cross = self.clone();
        cross.rotation = adjust_rotation(self.rotation, self.center, drag.offset, drag.position(end));
        cross
    }
}

impl ShapeEdit for DesignEdge {
    const CAPABILITIES: ShapeCapabilities = ShapeCapabilities {
        edit_point: true,
        edit_line: false,
        rotate: false,
        drag: true,
        alt_click: false,
        control_click: false,
    };

    fn drag_point(&self, drag: &DragOrigin, end: Point) -> Self {
        let mut edge = self.clone();
        match drag.index {
            0 => edge.start = drag.position(end),
            1 => edge.end = drag.position(end),
            _ => {}
        }
        edge
    }
}

impl ShapeEdit for DesignSegments {
    const CAPABILITIES: ShapeCapabilities = ShapeCapabilities {
        edit_point: true,
        edit_line: false,
        rotate: false,
        drag: true,
        alt_click: false,
        control_click: false,
    };

    fn drag_point(&self, drag: &DragOrigin, end: Point) -> Self {
        let mut segments = self.clone();
        if let Some(point) = segments.points.get_mut(drag.index) {
            *point = drag.position(end);
        }
        segments
    }
}
