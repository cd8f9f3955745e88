use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point, PointList};
use crate::hit_test;

/// Open polyline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignSegments {
    pub points: Vec<Point>,
}

impl DesignSegments {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl DesignerShape for DesignSegments {
    fn points(&self) -> PointList {
        self.points.iter().copied().collect()
    }

    fn contains_point(&self, p: Point, margin: f64) -> bool {
        hit_test::near_polyline(&self.points, p, margin, false)
    }

    /// Mean of the points, or the origin when empty
    fn center(&self) -> Point {
        if self.points.is_empty() {
            return Point::ORIGIN;
        }
        let sum = self
            .points
            .iter()
            .fold(Point::ORIGIN, |acc, p| acc + *p);
        sum / self.points.len() as f64
    }

    fn set_center(&mut self, center: Point) {
        let offset = center - self.center();
        for p in &mut self.points {
            *p += offset;
        }
    }
}
