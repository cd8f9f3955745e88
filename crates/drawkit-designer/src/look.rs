//! Stroke and fill styling carried alongside each shape.
//!
//! The editor never interprets a [`Look`]; it is handed to the render
//! backend as-is.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const GRAY: Self = Self::new(128, 128, 128, 255);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Look {
    pub stroke_enable: bool,
    /// Stroke width in logical units, 0 to 100
    pub stroke_weight: f64,
    pub stroke_color: Rgba,
    pub fill_enable: bool,
    pub fill_color: Rgba,
    pub antialias: bool,
}

impl Look {
    pub const MAX_STROKE_WEIGHT: f64 = 100.0;

    pub fn with_stroke_weight(mut self, weight: f64) -> Self {
        self.stroke_weight = weight.clamp(0.0, Self::MAX_STROKE_WEIGHT);
        self
    }

    pub fn with_fill(mut self, color: Rgba) -> Self {
        self.fill_enable = true;
        self.fill_color = color;
        self
    }

    /// Whether drawing with this look produces any pixels
    pub fn is_visible(&self) -> bool {
        (self.stroke_enable && self.stroke_weight > 0.0) || self.fill_enable
    }
}

impl Default for Look {
    fn default() -> Self {
        Self {
            stroke_enable: true,
            stroke_weight: 1.0,
            stroke_color: Rgba::WHITE,
            fill_enable: false,
            fill_color: Rgba::GRAY,
            antialias: true,
        }
    }
}
