//! The `PixelColor` value type and its textual encodings.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors produced when parsing a color from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// A hex color did not have exactly six hex digits.
    #[error("expected 6 hex digits, got '{0}'")]
    HexLength(String),
    /// A hex color contained a non-hex character.
    #[error("invalid hex digit in '{0}'")]
    HexDigit(String),
    /// An `r,g,b` triple did not have exactly three components.
    #[error("expected three comma-separated channels, got '{0}'")]
    ChannelCount(String),
    /// A channel was not an integer in `0..=255`.
    #[error("channel '{0}' is not an integer in 0..=255")]
    Channel(String),
}

/// A single RGB pixel value. Derived from the raster on demand; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` encoding, each channel zero-padded to two digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `rrggbb` (either case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if the input is not six hex digits.
    pub fn from_hex(raw: &str) -> Result<Self, ColorParseError> {
        let digits = raw.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ColorParseError::HexLength(raw.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::HexDigit(raw.to_string()));
        }
        let channel = |at: usize| match digits.get(at..at + 2).map(|s| u8::from_str_radix(s, 16)) {
            Some(Ok(value)) => Ok(value),
            _ => Err(ColorParseError::HexDigit(raw.to_string())),
        };
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }

    /// Parse an `r,g,b` triple (whitespace around channels allowed).
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] on a wrong channel count or out-of-range channel.
    pub fn from_triple(raw: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(ColorParseError::ChannelCount(raw.to_string()));
        };
        let channel = |s: &str| s.parse::<u8>().map_err(|_| ColorParseError::Channel(s.to_string()));
        Ok(Self { r: channel(*r)?, g: channel(*g)?, b: channel(*b)? })
    }

    /// The `r,g,b` form used as the lookup service query value.
    #[must_use]
    pub fn to_triple(self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }

    /// CSS `rgb(r, g, b)` form, used for the swatch fill.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for PixelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for PixelColor {
    type Err = ColorParseError;

    /// Accepts either `#rrggbb` or `r,g,b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') { Self::from_triple(s) } else { Self::from_hex(s) }
    }
}
