//! The immutable RGB raster handed to the widget by the image host.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use crate::color::PixelColor;

/// Bytes per pixel in a [`RasterImage`] buffer.
pub const CHANNELS: usize = 3;

/// Errors produced when constructing a [`RasterImage`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    /// Width or height is zero.
    #[error("raster dimensions must be non-zero, got {width}x{height}")]
    Empty { width: u32, height: u32 },
    /// The pixel buffer is not `width * height * 3` bytes long.
    #[error("raster buffer has {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    /// `width * height * 3` does not fit in `usize` on this target.
    #[error("raster {width}x{height} is too large to address")]
    TooLarge { width: u32, height: u32 },
}

/// A fixed-size grid of RGB pixels, row-major, no alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Build a raster, checking that the buffer matches the dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError`] for zero dimensions, an unaddressable size, or a
    /// buffer of the wrong length.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::Empty { width, height });
        }
        let expected = buffer_len(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::LengthMismatch { expected, actual: pixels.len() });
        }
        Ok(Self { width, height, pixels })
    }

    /// Build a raster where every pixel has the same color.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Empty`] for zero dimensions and
    /// [`RasterError::TooLarge`] when the buffer size overflows.
    pub fn filled(width: u32, height: u32, color: PixelColor) -> Result<Self, RasterError> {
        let count = buffer_len(width, height)? / CHANNELS;
        let pixels = std::iter::repeat_n([color.r, color.g, color.b], count)
            .flatten()
            .collect();
        Self::new(width, height, pixels)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The stored color at `(x, y)`, or `None` outside the raster.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<PixelColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
        match self.pixels.get(offset..offset + CHANNELS) {
            Some(&[r, g, b]) => Some(PixelColor { r, g, b }),
            _ => None,
        }
    }
}

/// Byte length of a `width` x `height` RGB buffer. 32-bit targets overflow first.
fn buffer_len(width: u32, height: u32) -> Result<usize, RasterError> {
    let too_large = RasterError::TooLarge { width, height };
    let (Ok(w), Ok(h)) = (usize::try_from(width), usize::try_from(height)) else {
        return Err(too_large);
    };
    w.checked_mul(h)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(too_large)
}
