//! Pixel inspection widget: hover over an image, see the color under the cursor.
//!
//! This crate owns the interactive core of the inspector. It samples pixels
//! from an uploaded raster, converts pointer events into surface-local pixel
//! coordinates, debounces remote color-name lookups, and derives the tooltip
//! content shown next to the cursor. The host is responsible only for feeding
//! it pointer events and a clock, running the lookups it asks for, and showing
//! the resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`]: wires the modules below, returns actions |
//! | [`raster`] | Immutable RGB raster handed over by the image host |
//! | [`color`] | `PixelColor` value type and HEX/RGB encodings |
//! | [`surface`] | Drawable pixel buffer with exact `sample_at` queries |
//! | [`input`] | Pointer positions and the screen-to-pixel tracker |
//! | [`resolver`] | Debounced, staleness-safe name resolution state machine |
//! | [`debounce`] | Cancel-and-reschedule single-shot timer |
//! | [`tooltip`] | Tooltip visibility, position, and rendered lines |
//! | [`consts`] | Shared constants (quiet period, tooltip geometry, labels) |

pub mod color;
pub mod consts;
pub mod debounce;
pub mod engine;
pub mod input;
pub mod raster;
pub mod resolver;
pub mod surface;
pub mod tooltip;
