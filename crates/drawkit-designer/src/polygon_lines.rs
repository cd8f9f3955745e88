//! Edge view of a closed polygon.
//!
//! Edge `i` runs from vertex `i` to vertex `i + 1` (wrapping) and is stored
//! as a [`Line`] referenced at its midpoint. Vertices are recovered by
//! intersecting neighbouring edges, so moving one edge drags both of its
//! corners along the adjacent edges.

use smallvec::SmallVec;

use crate::line::{Line, Segment};
use crate::model::{Point, PointList, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonLines {
    lines: SmallVec<[Line; 8]>,
    vertices: PointList,
}

impl PolygonLines {
    /// Edges of a closed polygon; fewer than three points yield no edges.
    pub fn new(points: &[Point]) -> Self {
        if points.len() < 3 {
            return Self {
                lines: SmallVec::new(),
                vertices: PointList::new(),
            };
        }

        let count = points.len();
        let lines = (0..count)
            .map(|i| Line::from_segment(points[i], points[(i + 1) % count]))
            .collect();

        Self {
            lines,
            vertices: points.iter().copied().collect(),
        }
    }

    /// Axis-aligned rectangle of `size` centered on the origin, clockwise
    /// from the top-left corner in screen coordinates.
    pub fn rectangle(size: Size) -> Self {
        let half = size.half();
        Self::new(&[
            Point::new(-half.x, -half.y),
            Point::new(half.x, -half.y),
            Point::new(half.x, half.y),
            Point::new(-half.x, half.y),
        ])
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn line_mut(&mut self, index: usize) -> Option<&mut Line> {
        self.lines.get_mut(index)
    }

    /// Segment between the vertices the edges were built from
    pub fn segment(&self, index: usize) -> Option<Segment> {
        let count = self.vertices.len();
        if index >= count {
            return None;
        }
        Some(Segment::new(
            self.vertices[index],
            self.vertices[(index + 1) % count],
        ))
    }

    /// Vertices from the intersections of neighbouring edges.
    ///
    /// Where two neighbours are parallel (a vertex inserted on a straight
    /// edge) the original vertex is projected onto the outgoing edge.
    pub fn points(&self) -> PointList {
        let count = self.lines.len();
        (0..count)
            .map(|i| {
                let incoming = &self.lines[(i + count - 1) % count];
                let outgoing = &self.lines[i];
                incoming
                    .intersect(outgoing)
                    .unwrap_or_else(|_| project(self.vertices[i], outgoing))
            })
            .collect()
    }

    /// Nearest edge whose segment lies within `margin` of `point`
    pub fn find(&self, point: Point, margin: f64) -> Option<usize> {
        (0..self.lines.len())
            .filter_map(|i| {
                let distance = self.segment(i)?.distance_to_point(point);
                (distance <= margin).then_some((i, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

fn project(point: Point, line: &Line) -> Point {
    let direction = line.direction.normalized();
    line.point + direction * (point - line.point).dot(&direction)
}
