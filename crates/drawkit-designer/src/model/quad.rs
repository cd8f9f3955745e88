use drawkit_core::GeometryError;
use nalgebra::{Matrix3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point, PointList, Size};
use crate::hit_test;
use crate::line::Line;
use crate::quad_lines::QuadLines;

/// Quadrilateral derived from a rectangle by perspective, shear, rotation,
/// scale, and translation, in that order.
///
/// No vertices are stored; every call to `points()` derives them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignQuad {
    pub center: Point,
    pub size: Size,
    pub scale: f64,
    pub rotation: f64,
    pub shear: Point,
    pub perspective: Point,
}

impl DesignQuad {
    pub const SHEAR_LIMIT: f64 = 3.0;
    pub const PERSPECTIVE_LIMIT: f64 = 90.0;

    pub fn new(center: Point, size: Size) -> Self {
        Self {
            center,
            size,
            ..Self::default()
        }
    }

    /// Translate · Scale · Rotate · Shear
    pub fn transform(&self) -> Matrix3<f64> {
        let translate = Matrix3::new_translation(&Vector2::new(self.center.x, self.center.y));
        let scale = Matrix3::new_nonuniform_scaling(&Vector2::new(self.scale, self.scale));
        let rotate = Matrix3::new_rotation(self.rotation.to_radians());
        let shear = Matrix3::new(
            1.0,
            self.shear.x,
            0.0,
            self.shear.y,
            1.0,
            0.0,
            0.0,
            0.0,
            1.0,
        );

        translate * scale * rotate * shear
    }

    /// Vertices scaled by `scale` instead of `self.scale`
    pub fn try_points_scaled(&self, scale: f64) -> Result<PointList, GeometryError> {
        let half = self.size.half();
        let corners = QuadLines::new(half.x, half.y)
            .apply_perspective(self.perspective)
            .points()?;

        let transform = DesignQuad {
            scale,
            ..self.clone()
        }
        .transform();

        Ok(corners.iter().map(|p| apply(&transform, *p)).collect())
    }

    pub fn try_points(&self) -> Result<PointList, GeometryError> {
        self.try_points_scaled(self.scale)
    }

    /// Fits `size` and `perspective` to four absolute corners, holding the
    /// center, scale, rotation, and shear fixed.
    pub fn set_points(&mut self, points: &[Point]) -> Result<(), GeometryError> {
        let corners = <[Point; 4]>::try_from(points).map_err(|_| {
            GeometryError::NotEnoughPoints {
                required: 4,
                actual: points.len(),
            }
        })?;

        let inverse = self
            .transform()
            .try_inverse()
            .ok_or(GeometryError::SingularTransform)?;

        let local = corners.map(|p| apply(&inverse, p));
        let lines = QuadLines::from_points(&local);
        let perspective = lines.perspective();
        let size = lines.undo_perspective(perspective).size()?;

        self.perspective = perspective;
        self.size = size;
        Ok(())
    }

    /// Edge `index` as a [`Line`] through two derived corners
    pub fn side(&self, index: usize) -> Result<Line, GeometryError> {
        if index > 3 {
            return Err(GeometryError::SideIndexOutOfRange { index });
        }
        let points = self.try_points()?;
        Ok(Line::from_segment(points[index], points[(index + 1) % 4]))
    }

    pub fn side_length(&self, index: usize) -> Result<f64, GeometryError> {
        Ok(self.side(index)?.direction.magnitude())
    }

    /// Area as two triangles either side of the p0-p2 diagonal
    pub fn area(&self) -> Result<f64, GeometryError> {
        let points = self.try_points()?;
        let bisecting = Line::through(points[0], points[2]);
        let length = (points[2] - points[0]).magnitude();
        let upper = bisecting.distance_to_point(points[1]);
        let lower = bisecting.distance_to_point(points[3]);
        Ok((upper + lower) * length / 2.0)
    }

    pub fn margin_scale(&self, margin: f64) -> f64 {
        let magnitude = self.size.magnitude();
        if magnitude > 0.0 {
            self.scale + margin / magnitude
        } else {
            self.scale
        }
    }

    /// Corners of the plain rectangle, used when perspective degenerates
    fn rectangle_points(&self) -> PointList {
        let half = self.size.half();
        let transform = self.transform();
        [
            Point::new(-half.x, -half.y),
            Point::new(half.x, -half.y),
            Point::new(half.x, half.y),
            Point::new(-half.x, half.y),
        ]
        .iter()
        .map(|p| apply(&transform, *p))
        .collect()
    }
}

impl Default for DesignQuad {
    fn default() -> Self {
        Self {
            center: Point::new(960.0, 540.0),
            size: Size::new(300.0, 200.0),
            scale: 1.0,
            rotation: 0.0,
            shear: Point::ORIGIN,
            perspective: Point::ORIGIN,
        }
    }
}

impl DesignerShape for DesignQuad {
    fn points(&self) -> PointList {
        self.try_points().unwrap_or_else(|e| {
            tracing::warn!("Quad perspective {} is degenerate: {}", self.perspective, e);
            self.rectangle_points()
        })
    }

    fn contains_point(&self, p: Point, margin: f64) -> bool {
        match self.try_points_scaled(self.margin_scale(margin)) {
            Ok(points) => hit_test::contains(&points, p),
            Err(_) => false,
        }
    }

    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }
}

fn apply(transform: &Matrix3<f64>, p: Point) -> Point {
    let v = transform * Vector3::new(p.x, p.y, 1.0);
    Point::new(v.x, v.y)
}
