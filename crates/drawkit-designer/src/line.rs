//! Infinite lines and finite segments.
//!
//! A [`Line`] is a reference point plus a direction. Polygon and quad edges
//! are kept as lines whose reference point is the edge midpoint, so that
//! rotating an edge "about itself" pivots around its middle.

use drawkit_core::GeometryError;
use serde::{Deserialize, Serialize};

use crate::model::{rotate_point, Point};

/// Relative tolerance on the direction cross product below which two lines
/// are treated as parallel.
const PARALLEL_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub point: Point,
    pub direction: Point,
}

impl Line {
    pub fn new(point: Point, direction: Point) -> Self {
        Self { point, direction }
    }

    /// Line through `a` heading towards `b`, referenced at `a`
    pub fn through(a: Point, b: Point) -> Self {
        Self::new(a, b - a)
    }

    /// Line carrying the segment `start -> end`, referenced at its midpoint
    pub fn from_segment(start: Point, end: Point) -> Self {
        Self::new(start.midpoint(&end), end - start)
    }

    /// Intersection of two infinite lines.
    ///
    /// Fails with [`GeometryError::ParallelLines`] when the directions are
    /// parallel or either one has zero length.
    pub fn intersect(&self, other: &Line) -> Result<Point, GeometryError> {
        let denominator = self.direction.cross(&other.direction);
        let scale = self.direction.magnitude() * other.direction.magnitude();
        if scale == 0.0 || denominator.abs() <= PARALLEL_TOLERANCE * scale {
            return Err(GeometryError::ParallelLines);
        }

        let t = (other.point - self.point).cross(&other.direction) / denominator;
        Ok(self.point + self.direction * t)
    }

    /// Same reference point, direction rotated by `degrees`
    pub fn rotated(&self, degrees: f64) -> Line {
        Line::new(self.point, self.direction.rotated(degrees))
    }

    /// Rotates the whole line about `pivot`
    pub fn rotated_about(&self, pivot: Point, degrees: f64) -> Line {
        Line::new(
            rotate_point(self.point, pivot, degrees),
            self.direction.rotated(degrees),
        )
    }

    /// Perpendicular distance from `p` to the infinite line
    pub fn distance_to_point(&self, p: Point) -> f64 {
        let length = self.direction.magnitude();
        if length == 0.0 {
            return self.point.distance_to(&p);
        }
        self.direction.cross(&(p - self.point)).abs() / length
    }

    /// Direction angle in (-180, 180]
    pub fn angle_degrees(&self) -> f64 {
        self.direction.angle_degrees()
    }

    /// Point `distance` units from the reference point along the direction
    pub fn end_point(&self, distance: f64) -> Point {
        self.point + self.direction.normalized() * distance
    }
}

/// Finite segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    /// Distance from `p` to the closest point of the segment
    pub fn distance_to_point(&self, p: Point) -> f64 {
        let d = self.end - self.start;
        let length_squared = d.dot(&d);
        if length_squared == 0.0 {
            return self.start.distance_to(&p);
        }
        let t = ((p - self.start).dot(&d) / length_squared).clamp(0.0, 1.0);
        (self.start + d * t).distance_to(&p)
    }
}
