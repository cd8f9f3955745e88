use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{DesignerShape, Point, PointList};
use crate::angles::wrap_degrees;
use crate::hit_test;

/// Regular polygon with `sides` vertices on a circle of `radius`.
///
/// `side_length` is kept consistent with `radius` and `sides`, so the three
/// are only changed through the setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRegularPolygon {
    pub center: Point,
    radius: f64,
    sides: u32,
    side_length: f64,
    pub rotation: f64,
}

impl DesignRegularPolygon {
    pub const MIN_SIDES: u32 = 3;
    pub const MAX_SIDES: u32 = 36;
    pub const MAX_RADIUS: f64 = 1000.0;

    pub fn new(center: Point, radius: f64, sides: u32, rotation: f64) -> Self {
        let mut shape = Self {
            center,
            radius: 0.0,
            sides: Self::MIN_SIDES,
            side_length: 0.0,
            rotation: wrap_degrees(rotation),
        };
        shape.sides = sides.clamp(Self::MIN_SIDES, Self::MAX_SIDES);
        shape.set_radius(radius);
        shape
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.clamp(0.0, Self::MAX_RADIUS);
        self.side_length = 2.0 * self.radius * self.half_angle().sin();
    }

    pub fn set_sides(&mut self, sides: u32) {
        self.sides = sides.clamp(Self::MIN_SIDES, Self::MAX_SIDES);
        self.side_length = 2.0 * self.radius * self.half_angle().sin();
    }

    /// Sets the side length and derives the radius from it
    pub fn set_side_length(&mut self, side_length: f64) {
        self.set_radius((side_length / 2.0) / self.half_angle().sin());
    }

    /// Distance from the center to the middle of each side (the apothem)
    pub fn midpoint_radius(&self) -> f64 {
        self.radius * self.half_angle().cos()
    }

    pub fn set_midpoint_radius(&mut self, midpoint_radius: f64) {
        self.set_radius(midpoint_radius / self.half_angle().cos());
    }

    /// Copy rotated by `degrees`, wrapped to [-180, 180)
    pub fn rotate_deg(&self, degrees: f64) -> Self {
        Self {
            rotation: wrap_degrees(self.rotation + degrees),
            ..self.clone()
        }
    }

    pub fn margin_scale(&self, margin: f64) -> f64 {
        if self.radius < 1e-9 {
            return 0.0;
        }
        (self.radius + margin) / self.radius
    }

    /// Vertices at `radius * scale`, starting half a step before `rotation`
    pub fn points_scaled(&self, scale: f64) -> PointList {
        let step = 360.0 / f64::from(self.sides);
        let first = self.rotation - step / 2.0;
        let arm = Point::new(self.radius * scale, 0.0);
        (0..self.sides)
            .map(|i| self.center + arm.rotated(first + step * f64::from(i)))
            .collect()
    }

    fn half_angle(&self) -> f64 {
        PI / f64::from(self.sides)
    }
}

impl Default for DesignRegularPolygon {
    fn default() -> Self {
        Self::new(Point::ORIGIN, 100.0, 3, 0.0)
    }
}

impl DesignerShape for DesignRegularPolygon {
    fn points(&self) -> PointList {
        self.points_scaled(1.0)
    }

    fn contains_point(&self, p: Point, margin: f64) -> bool {
        hit_test::contains(&self.points_scaled(self.margin_scale(margin)), p)
    }

    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }
}
