use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point, PointList};
use crate::hit_test;

/// Cross marker drawn as two perpendicular strokes of length `size`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCross {
    pub center: Point,
    pub size: f64,
    pub rotation: f64,
}

impl DesignCross {
    pub const MAX_SIZE: f64 = 100.0;

    pub fn new(center: Point, size: f64, rotation: f64) -> Self {
        Self {
            center,
            size: size.clamp(0.0, Self::MAX_SIZE),
            rotation,
        }
    }

    /// The two strokes as `(start, end)` pairs
    pub fn strokes(&self) -> [(Point, Point); 2] {
        let points = self.points();
        [(points[0], points[2]), (points[1], points[3])]
    }
}

impl Default for DesignCross {
    fn default() -> Self {
        Self::new(Point::ORIGIN, 25.0, 0.0)
    }
}

impl DesignerShape for DesignCross {
    /// Arm ends, counter-clockwise from the rotated +x arm
    fn points(&self) -> PointList {
        let arm = Point::new(self.size / 2.0, 0.0);
        (0..4)
            .map(|i| self.center + arm.rotated(self.rotation + 90.0 * f64::from(i)))
            .collect()
    }

    fn contains_point(&self, p: Point, margin: f64) -> bool {
        self.strokes()
            .iter()
            .any(|(start, end)| hit_test::near_polyline(&[*start, *end], p, margin, false))
    }

    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }
}
