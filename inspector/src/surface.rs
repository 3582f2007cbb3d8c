//! Pixel surface: the drawable buffer the widget samples colors from.
//!
//! The surface is loaded once per upload session. It copies the raster into
//! its own buffer at native resolution (any scaling happened in the image host
//! before handoff) and afterwards answers `sample_at` queries synchronously.
//! Samples are the exact stored bytes: no interpolation, no gamma.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::color::PixelColor;
use crate::raster::RasterImage;

/// Errors produced by [`PixelSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The queried coordinate lies outside `[0, W) x [0, H)`.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} surface")]
    OutOfBounds { x: i64, y: i64, width: u32, height: u32 },
    /// `load` was called on a surface that already holds an image.
    #[error("surface already holds a {width}x{height} image")]
    AlreadyLoaded { width: u32, height: u32 },
}

/// Drawable raster buffer sized to the loaded image.
#[derive(Debug, Clone, Default)]
pub struct PixelSurface {
    buffer: Option<RasterImage>,
}

impl PixelSurface {
    /// An empty surface. Every sample fails until [`PixelSurface::load`] runs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the raster into the surface. Allowed exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::AlreadyLoaded`] on a second call.
    pub fn load(&mut self, image: &RasterImage) -> Result<(), SurfaceError> {
        if let Some(existing) = &self.buffer {
            return Err(SurfaceError::AlreadyLoaded { width: existing.width(), height: existing.height() });
        }
        self.buffer = Some(image.clone());
        Ok(())
    }

    /// `(width, height)` of the drawn image; `(0, 0)` before load.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.buffer.as_ref().map_or((0, 0), |b| (b.width(), b.height()))
    }

    /// The exact stored color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::OutOfBounds`] if `x` is not in `[0, W)` or `y`
    /// is not in `[0, H)`.
    pub fn sample_at(&self, x: i64, y: i64) -> Result<PixelColor, SurfaceError> {
        let (width, height) = self.size();
        let out_of_bounds = SurfaceError::OutOfBounds { x, y, width, height };
        let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
            return Err(out_of_bounds);
        };
        self.buffer
            .as_ref()
            .and_then(|b| b.pixel(px, py))
            .ok_or(out_of_bounds)
    }
}
