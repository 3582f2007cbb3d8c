//! Pointer model: screen points, cursor pixels, and the tracker between them.
//!
//! `Point` is a raw client-space coordinate as reported by the host (CSS
//! pixels, fractional). `CursorPosition` is the integer pixel under the
//! pointer in surface-local space. `PointerTracker` converts one to the other
//! and rejects anything that falls outside the surface, which the engine then
//! treats exactly like a pointer-leave.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

/// A point in client (screen) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer pixel coordinate inside the surface, `[0, W) x [0, H)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CursorPosition {
    pub x: u32,
    pub y: u32,
}

/// Converts client coordinates to surface pixels.
#[derive(Debug, Clone, Copy)]
pub struct PointerTracker {
    /// Client-space position of the surface's top-left corner.
    origin: Point,
    width: u32,
    height: u32,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self { origin: Point::new(0.0, 0.0), width: 0, height: 0 }
    }
}

impl PointerTracker {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Move the surface origin (e.g. after the page scrolled or re-laid out).
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// `floor(client - origin)`, or `None` when that pixel is off the surface.
    #[must_use]
    pub fn locate(&self, client: Point) -> Option<CursorPosition> {
        let local_x = (client.x - self.origin.x).floor();
        let local_y = (client.y - self.origin.y).floor();
        if !local_x.is_finite() || !local_y.is_finite() {
            return None;
        }
        if local_x < 0.0 || local_y < 0.0 || local_x >= f64::from(self.width) || local_y >= f64::from(self.height) {
            return None;
        }
        // Range-checked above, so the casts are exact.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let position = CursorPosition { x: local_x as u32, y: local_y as u32 };
        Some(position)
    }
}
