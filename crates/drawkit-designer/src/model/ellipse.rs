use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point, PointList};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignEllipse {
    pub center: Point,
    /// Full length of the axis along the rotated x direction
    pub major: f64,
    /// Full length of the axis along the rotated y direction
    pub minor: f64,
    pub rotation: f64,
    pub scale: f64,
}

impl DesignEllipse {
    pub const MAX_AXIS: f64 = 1000.0;

    pub fn new(center: Point, major: f64, minor: f64) -> Self {
        Self {
            center,
            major: major.clamp(0.0, Self::MAX_AXIS),
            minor: minor.clamp(0.0, Self::MAX_AXIS),
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// Moves the axis handle `index` to `end`, changing only that axis length
    pub fn edit_point(&mut self, end: Point, index: usize) {
        if self.scale <= 0.0 {
            return;
        }
        let length = (2.0 * end.distance_to(&self.center) / self.scale).clamp(0.0, Self::MAX_AXIS);
        if index % 2 == 0 {
            self.major = length;
        } else {
            self.minor = length;
        }
    }
}

impl Default for DesignEllipse {
    fn default() -> Self {
        Self {
            center: Point::new(400.0, 400.0),
            major: 200.0,
            minor: 300.0,
            rotation: 45.0,
            scale: 1.0,
        }
    }
}

impl DesignerShape for DesignEllipse {
    /// The four axis endpoints: +major, +minor, -major, -minor
    fn points(&self) -> PointList {
        let major = Point::new(self.major / 2.0 * self.scale, 0.0).rotated(self.rotation);
        let minor = Point::new(0.0, self.minor / 2.0 * self.scale).rotated(self.rotation);
        PointList::from_slice(&[
            self.center + major,
            self.center + minor,
            self.center - major,
            self.center - minor,
        ])
    }

    fn contains_point(&self, p: Point, margin: f64) -> bool {
        let local = (p - self.center).rotated(-self.rotation);
        let t = (self.major * local.y).atan2(self.minor * local.x);
        let extent = Point::new(t.cos() * self.major / 2.0, t.sin() * self.minor / 2.0) * self.scale;
        local.magnitude() <= extent.magnitude() + margin
    }

    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }
}
