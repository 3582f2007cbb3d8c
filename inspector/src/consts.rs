//! Shared constants for the inspector crate.

// ── Name resolution ─────────────────────────────────────────────

/// Quiet period before a name lookup is issued, in milliseconds.
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 300;

// ── Tooltip geometry ────────────────────────────────────────────

/// Horizontal distance from the cursor pixel to the tooltip's left edge.
pub const TOOLTIP_OFFSET_X_PX: i64 = 15;

/// Vertical distance from the cursor pixel to the tooltip's top edge.
pub const TOOLTIP_OFFSET_Y_PX: i64 = 15;

/// Swatch width in CSS pixels.
pub const SWATCH_WIDTH_PX: u32 = 30;

/// Swatch height in CSS pixels.
pub const SWATCH_HEIGHT_PX: u32 = 20;

// ── Labels ──────────────────────────────────────────────────────

/// Name line shown while a lookup is debouncing or in flight.
pub const LOADING_LABEL: &str = "Loading…";

/// Name line shown when the lookup failed or the color has no name.
pub const UNKNOWN_LABEL: &str = "Unknown";
