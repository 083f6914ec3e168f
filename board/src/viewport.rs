#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Zoom and pan state for the infinite board.
///
/// `offset_x` / `offset_y` are in screen pixels.
/// `zoom` is a scale factor (1.0 = no zoom), kept within `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl Viewport {
    /// Build a viewport from raw values, clamping the zoom into range.
    ///
    /// Non-finite inputs fall back to the identity values.
    #[must_use]
    pub fn from_parts(zoom: f64, offset_x: f64, offset_y: f64) -> Self {
        let zoom = if zoom.is_finite() && zoom > 0.0 { clamp_zoom(zoom) } else { 1.0 };
        Self {
            zoom,
            offset_x: if offset_x.is_finite() { offset_x } else { 0.0 },
            offset_y: if offset_y.is_finite() { offset_y } else { 0.0 },
        }
    }

    /// Convert a screen-space point (pixels) to world coordinates.
    #[must_use]
    pub fn world_from_screen(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.zoom,
            y: (screen.y - self.offset_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (pixels).
    #[must_use]
    pub fn screen_from_world(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.offset_x,
            y: world.y * self.zoom + self.offset_y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Multiply the zoom by `factor`, clamped. The offset is left alone, so
    /// zooming is anchored at the screen origin rather than the cursor.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = clamp_zoom(self.zoom * factor);
    }

    /// Shift the view by a screen-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Zoom as a rounded percentage, as shown in the status bar.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
