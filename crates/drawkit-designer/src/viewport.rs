//! Viewport and coordinate transformation for the editing surface.
//!
//! Converts between device coordinates (pointer positions, pixels) and
//! logical coordinates (shape space). Both spaces share the same axis
//! directions, so the mapping is a uniform scale plus an offset.

use std::fmt;

use drawkit_settings::ViewSettings;

use crate::model::Point;

/// Zoom and scroll state.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
    /// Device position of the logical origin
    pan: Point,
}

impl Viewport {
    /// Creates a viewport from view settings, with the logical origin at the
    /// device origin.
    pub fn new(settings: &ViewSettings) -> Self {
        let mut viewport = Self {
            zoom: 1.0,
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            zoom_step: settings.zoom_step,
            pan: Point::ORIGIN,
        };
        viewport.set_zoom(settings.zoom);
        viewport
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * self.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / self.zoom_step);
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    /// Scrolls by a device-space delta.
    pub fn pan_by(&mut self, delta: Point) {
        self.pan += delta;
    }

    /// Converts a device position to logical coordinates.
    ///
    /// ```text
    /// logical = (device - pan) / zoom
    /// ```
    pub fn device_to_logical(&self, device: Point) -> Point {
        (device - self.pan) / self.zoom
    }

    /// Converts a logical position to device coordinates.
    pub fn logical_to_device(&self, logical: Point) -> Point {
        logical * self.zoom + self.pan
    }

    /// Zooms while keeping the logical point under `device` fixed.
    ///
    /// Useful for "zoom to cursor" functionality.
    pub fn zoom_at(&mut self, device: Point, zoom: f64) {
        let anchor = self.device_to_logical(device);
        self.set_zoom(zoom);
        self.pan = device - anchor * self.zoom;
    }

    pub fn zoom_in_at(&mut self, device: Point) {
        self.zoom_at(device, self.zoom * self.zoom_step);
    }

    pub fn zoom_out_at(&mut self, device: Point) {
        self.zoom_at(device, self.zoom / self.zoom_step);
    }

    /// Resets to 1:1 zoom with no scroll.
    pub fn reset(&mut self) {
        self.zoom = 1.0_f64.clamp(self.min_zoom, self.max_zoom);
        self.pan = Point::ORIGIN;
    }

    /// Device-space transform for a tiny-skia canvas.
    pub fn transform(&self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_scale(self.zoom as f32, self.zoom as f32)
            .post_translate(self.pan.x as f32, self.pan.y as f32)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan.x, self.pan.y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&ViewSettings::default())
    }
}
