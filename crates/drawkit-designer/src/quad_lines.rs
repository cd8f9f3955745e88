//! The four edges of a quadrilateral in its local (untransformed) frame.
//!
//! Perspective is modelled by rotating opposite edges in opposite directions
//! about their own midpoints; the corners are then the intersections of
//! adjacent edges. [`QuadLines::undo_perspective`] reverses that rotation so
//! the unperspected rectangle, and with it the size, can be measured back
//! from four arbitrary corners.

use drawkit_core::GeometryError;

use crate::line::Line;
use crate::model::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadLines {
    pub top: Line,
    pub right: Line,
    pub bottom: Line,
    pub left: Line,
}

impl QuadLines {
    /// Edges of an axis-aligned rectangle centered on the origin
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Self::from_points(&[
            Point::new(-half_width, -half_height),
            Point::new(half_width, -half_height),
            Point::new(half_width, half_height),
            Point::new(-half_width, half_height),
        ])
    }

    /// Edges through `[top_left, top_right, bottom_right, bottom_left]`
    pub fn from_points(points: &[Point; 4]) -> Self {
        Self {
            top: Line::from_segment(points[0], points[1]),
            right: Line::from_segment(points[1], points[2]),
            bottom: Line::from_segment(points[2], points[3]),
            left: Line::from_segment(points[3], points[0]),
        }
    }

    /// Rotates top by `+x/2`, bottom by `-x/2`, left by `+y/2` and right by
    /// `-y/2`, each about its own reference point.
    pub fn apply_perspective(&self, perspective: Point) -> Self {
        Self {
            top: self.top.rotated(perspective.x / 2.0),
            right: self.right.rotated(-perspective.y / 2.0),
            bottom: self.bottom.rotated(-perspective.x / 2.0),
            left: self.left.rotated(perspective.y / 2.0),
        }
    }

    /// Corners `[top∩left, top∩right, bottom∩right, bottom∩left]`
    pub fn points(&self) -> Result<[Point; 4], GeometryError> {
        Ok([
            self.top.intersect(&self.left)?,
            self.top.intersect(&self.right)?,
            self.bottom.intersect(&self.right)?,
            self.bottom.intersect(&self.left)?,
        ])
    }

    /// Perspective angles measured from the edge directions.
    ///
    /// Opposite edges of a rectangle run antiparallel, so the angle between
    /// them is folded into [-90, 90]. At ±90 the pair is perpendicular and
    /// the fold cannot tell the two apart; the tilt of the top (or left)
    /// edge away from its rest direction decides the sign instead.
    pub fn perspective(&self) -> Point {
        Point::new(
            opposed(&self.top, &self.bottom, 0.0),
            opposed(&self.left, &self.right, 90.0),
        )
    }

    /// Rotates every edge back by half of `perspective`.
    ///
    /// Top and bottom pivot on their crossing with the vertical axis, left
    /// and right on their crossing with the horizontal axis. Those crossings
    /// are the midpoints the perspective was applied around.
    pub fn undo_perspective(&self, perspective: Point) -> Self {
        let vertical_axis = Line::new(Point::ORIGIN, Point::new(0.0, 1.0));
        let horizontal_axis = Line::new(Point::ORIGIN, Point::new(1.0, 0.0));

        let pivot = |line: &Line, axis: &Line| line.intersect(axis).unwrap_or(line.point);

        Self {
            top: self
                .top
                .rotated_about(pivot(&self.top, &vertical_axis), -perspective.x / 2.0),
            right: self
                .right
                .rotated_about(pivot(&self.right, &horizontal_axis), perspective.y / 2.0),
            bottom: self
                .bottom
                .rotated_about(pivot(&self.bottom, &vertical_axis), perspective.x / 2.0),
            left: self
                .left
                .rotated_about(pivot(&self.left, &horizontal_axis), -perspective.y / 2.0),
        }
    }

    /// Extent from the top-left to the bottom-right corner
    pub fn size(&self) -> Result<Size, GeometryError> {
        let top_left = self.top.intersect(&self.left)?;
        let bottom_right = self.bottom.intersect(&self.right)?;
        let extent = bottom_right - top_left;
        Ok(Size::new(extent.x, extent.y))
    }
}

/// Angles closer than this to ±90° are treated as exactly perpendicular
const PERPENDICULAR_TOLERANCE: f64 = 1e-6;

fn fold(degrees: f64) -> f64 {
    degrees - 180.0 * (degrees / 180.0).round()
}

fn opposed(first: &Line, second: &Line, rest: f64) -> f64 {
    let between = fold(first.angle_degrees() - second.angle_degrees());
    if 90.0 - between.abs() > PERPENDICULAR_TOLERANCE {
        return between;
    }
    90.0_f64.copysign(fold(first.angle_degrees() - rest))
}
