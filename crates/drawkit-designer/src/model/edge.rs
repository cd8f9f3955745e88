use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point, PointList};
use crate::line::Segment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignEdge {
    pub start: Point,
    pub end: Point,
}

impl DesignEdge {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// `count` evenly spaced points from start to end inclusive
    pub fn interpolate(&self, count: usize) -> Vec<Point> {
        match count {
            0 => Vec::new(),
            1 => vec![self.start],
            _ => {
                let step = (self.end - self.start) / (count - 1) as f64;
                (0..count).map(|i| self.start + step * i as f64).collect()
            }
        }
    }
}

impl Default for DesignEdge {
    fn default() -> Self {
        Self::new(Point::ORIGIN, Point::new(1.0, 0.0))
    }
}

impl DesignerShape for DesignEdge {
    fn points(&self) -> PointList {
        PointList::from_slice(&[self.start, self.end])
    }

    fn contains_point(&self, p: Point, margin: f64) -> bool {
        Segment::new(self.start, self.end).distance_to_point(p) <= margin
    }

    fn center(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    fn set_center(&mut self, center: Point) {
        let offset = center - self.center();
        self.start += offset;
        self.end += offset;
    }
}
