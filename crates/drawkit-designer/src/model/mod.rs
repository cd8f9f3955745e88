use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

mod cross;
mod edge;
mod ellipse;
mod polygon;
mod quad;
mod regular_polygon;
mod segments;

pub use cross::DesignCross;
pub use edge::DesignEdge;
pub use ellipse::DesignEllipse;
pub use polygon::{centered_points, DesignPolygon};
pub use quad::DesignQuad;
pub use regular_polygon::DesignRegularPolygon;
pub use segments::DesignSegments;

/// Vertex lists are short for every shape except large polygons.
pub type PointList = SmallVec<[Point; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Length of this point read as a vector from the origin
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction of this vector in degrees, in (-180, 180]
    pub fn angle_degrees(&self) -> f64 {
        let angle = self.y.atan2(self.x).to_degrees();
        if angle <= -180.0 {
            angle + 360.0
        } else {
            angle
        }
    }

    /// Rotates about the origin
    pub fn rotated(&self, degrees: f64) -> Point {
        let (s, c) = degrees.to_radians().sin_cos();
        Point::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Unit vector in the same direction, or the zero vector unchanged
    pub fn normalized(&self) -> Point {
        let m = self.magnitude();
        if m > 0.0 {
            *self / m
        } else {
            *self
        }
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Rotates `p` about `center` by `angle_deg` degrees
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    center + (p - center).rotated(angle_deg)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn magnitude(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Half extents as a vector from the center to the bottom-right corner
    pub fn half(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Which edit operations a shape variant accepts from the drag dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeCapabilities {
    pub edit_point: bool,
    pub edit_line: bool,
    pub rotate: bool,
    pub drag: bool,
    pub alt_click: bool,
    pub control_click: bool,
}

pub trait DesignerShape {
    /// Vertices used for drawing and for grabbing handles
    fn points(&self) -> PointList;

    fn contains_point(&self, p: Point, margin: f64) -> bool;

    fn center(&self) -> Point;

    fn set_center(&mut self, center: Point);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Polygon,
    Quad,
    Ellipse,
    RegularPolygon,
    Cross,
    Edge,
    Segments,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeType::Polygon => "polygon",
            ShapeType::Quad => "quad",
            ShapeType::Ellipse => "ellipse",
            ShapeType::RegularPolygon => "regular_polygon",
            ShapeType::Cross => "cross",
            ShapeType::Edge => "edge",
            ShapeType::Segments => "segments",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Polygon(DesignPolygon),
    Quad(DesignQuad),
    Ellipse(DesignEllipse),
    RegularPolygon(DesignRegularPolygon),
    Cross(DesignCross),
    Edge(DesignEdge),
    Segments(DesignSegments),
}

impl DesignerShape for Shape {
    fn points(&self) -> PointList {
        match self {
            Shape::Polygon(s) => s.points(),
            Shape::Quad(s) => s.points(),
            Shape::Ellipse(s) => s.points(),
            Shape::RegularPolygon(s) => s.points(),
            Shape::Cross(s) => s.points(),
            Shape::Edge(s) => s.points(),
            Shape::Segments(s) => s.points(),
        }
    }

    fn contains_point(&self, p: Point, margin: f64) -> bool {
        match self {
            Shape::Polygon(s) => s.contains_point(p, margin),
            Shape::Quad(s) => s.contains_point(p, margin),
            Shape::Ellipse(s) => s.contains_point(p, margin),
            Shape::RegularPolygon(s) => s.contains_point(p, margin),
            Shape::Cross(s) => s.contains_point(p, margin),
            Shape::Edge(s) => s.contains_point(p, margin),
            Shape::Segments(s) => s.contains_point(p, margin),
        }
    }

    fn center(&self) -> Point {
        match self {
            Shape::Polygon(s) => s.center(),
            Shape::Quad(s) => s.center(),
            Shape::Ellipse(s) => s.center(),
            Shape::RegularPolygon(s) => s.center(),
            Shape::Cross(s) => s.center(),
            Shape::Edge(s) => s.center(),
            Shape::Segments(s) => s.center(),
        }
    }

    fn set_center(&mut self, center: Point) {
        match self {
            Shape::Polygon(s) => s.set_center(center),
            Shape::Quad(s) => s.set_center(center),
            Shape::Ellipse(s) => s.set_center(center),
            Shape::RegularPolygon(s) => s.set_center(center),
            Shape::Cross(s) => s.set_center(center),
            Shape::Edge(s) => s.set_center(center),
            Shape::Segments(s) => s.set_center(center),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Quad(_) => ShapeType::Quad,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::RegularPolygon(_) => ShapeType::RegularPolygon,
            Shape::Cross(_) => ShapeType::Cross,
            Shape::Edge(_) => ShapeType::Edge,
            Shape::Segments(_) => ShapeType::Segments,
        }
    }

    /// Static capability table of the variant
    pub fn capabilities(&self) -> ShapeCapabilities {
        use crate::drag::ShapeEdit;

        match self {
            Shape::Polygon(_) => DesignPolygon::CAPABILITIES,
            Shape::Quad(_) => DesignQuad::CAPABILITIES,
            Shape::Ellipse(_) => DesignEllipse::CAPABILITIES,
            Shape::RegularPolygon(_) => DesignRegularPolygon::CAPABILITIES,
            Shape::Cross(_) => DesignCross::CAPABILITIES,
            Shape::Edge(_) => DesignEdge::CAPABILITIES,
            Shape::Segments(_) => DesignSegments::CAPABILITIES,
        }
    }

    /// Returns the rotation angle in degrees, zero for unrotated variants
    pub fn rotation(&self) -> f64 {
        match self {
            Shape::Polygon(s) => s.rotation,
            Shape::Quad(s) => s.rotation,
            Shape::Ellipse(s) => s.rotation,
            Shape::RegularPolygon(s) => s.rotation,
            Shape::Cross(s) => s.rotation,
            Shape::Edge(_) | Shape::Segments(_) => 0.0,
        }
    }

    /// Whether the outline closes back onto its first vertex
    pub fn is_closed(&self) -> bool {
        !matches!(self, Shape::Edge(_) | Shape::Segments(_) | Shape::Cross(_))
    }
}
