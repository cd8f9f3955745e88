use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point, PointList};
use crate::angles::wrap_degrees;
use crate::hit_test;

/// Total edge weight below which a polygon is treated as a single point
const CENTROID_WEIGHT_EPSILON: f64 = 1e-3;

/// Free-form closed polygon.
///
/// Points are stored relative to `center`, which is computed once from the
/// input points. Editing `points` afterwards does not move the center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPolygon {
    pub center: Point,
    pub scale: f64,
    pub rotation: f64,
    pub points: Vec<Point>,
}

impl DesignPolygon {
    pub const MIN_SCALE: f64 = 0.25;
    pub const MAX_SCALE: f64 = 16.0;

    /// Builds a polygon from absolute points, centered on their
    /// perimeter-weighted centroid.
    pub fn new(points: &[Point]) -> Self {
        let (center, points) = centered_points(points);
        Self {
            center,
            scale: 1.0,
            rotation: 0.0,
            points,
        }
    }

    /// Absolute vertices with the local points scaled by `scale`
    pub fn points_scaled(&self, scale: f64) -> PointList {
        self.points
            .iter()
            .map(|p| self.center + p.rotated(self.rotation) * scale)
            .collect()
    }

    /// Distance from the center to the farthest local point, at least 1
    pub fn radius(&self) -> f64 {
        self.points
            .iter()
            .map(Point::magnitude)
            .fold(1.0, f64::max)
    }

    /// Scale that grows the outline by roughly `margin` units
    pub fn margin_scale(&self, margin: f64) -> f64 {
        if self.points.len() < 3 {
            return self.scale;
        }
        self.scale + margin / self.radius()
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = wrap_degrees(rotation);
    }
}

impl Default for DesignPolygon {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl DesignerShape for DesignPolygon {
    fn points(&self) -> PointList {
        self.points_scaled(self.scale)
    }

    fn contains_point(&self, p: Point, margin: f64) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        hit_test::contains(&self.points_scaled(self.margin_scale(margin)), p)
    }

    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }
}

/// Perimeter-weighted centroid and the points expressed relative to it.
///
/// Two points keep the historical `(p0 - p1) / 2` center, which is not
/// their midpoint.
pub fn centered_points(points: &[Point]) -> (Point, Vec<Point>) {
    let center = match points {
        [] => return (Point::ORIGIN, Vec::new()),
        [only] => return (*only, vec![Point::ORIGIN]),
        [first, second] => (*first - *second) / 2.0,
        _ => {
            let count = points.len();
            let mut weighted = Point::ORIGIN;
            let mut total = 0.0;
            for i in 0..count {
                let start = points[i];
                let end = points[(i + 1) % count];
                let weight = start.distance_to(&end);
                weighted += start.midpoint(&end) * weight;
                total += weight;
            }

            if total < CENTROID_WEIGHT_EPSILON {
                points[0]
            } else {
                weighted / total
            }
        }
    };

    let relative = points.iter().map(|&p| p - center).collect();
    (center, relative)
}
