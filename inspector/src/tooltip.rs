//! Tooltip controller: visibility, placement, and rendered content.
//!
//! The tooltip has no state of its own beyond the inputs it was last given
//! (cursor pixel, sampled color, name state). Every [`TooltipView`] is derived
//! from those inputs on demand, so the content can never drift from the color
//! under the cursor.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use serde::Serialize;

use crate::color::PixelColor;
use crate::consts::{LOADING_LABEL, SWATCH_HEIGHT_PX, SWATCH_WIDTH_PX, TOOLTIP_OFFSET_X_PX, TOOLTIP_OFFSET_Y_PX, UNKNOWN_LABEL};
use crate::input::CursorPosition;
use crate::resolver::NameState;

/// Filled color sample drawn at the left of the tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub fill: String,
    pub width: u32,
    pub height: u32,
}

/// Everything a host needs to draw the tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipView {
    /// Left edge in surface-local pixels.
    pub left: i64,
    /// Top edge in surface-local pixels.
    pub top: i64,
    pub cursor: CursorPosition,
    pub color: PixelColor,
    pub swatch: Swatch,
    /// `Loading…`, the resolved name, or `Unknown`.
    pub name: String,
    /// `RGB: (r, g, b)`
    pub rgb: String,
    /// `HEX: #rrggbb`
    pub hex: String,
}

impl TooltipView {
    #[must_use]
    pub fn new(cursor: CursorPosition, color: PixelColor, name: &NameState) -> Self {
        Self {
            left: i64::from(cursor.x) + TOOLTIP_OFFSET_X_PX,
            top: i64::from(cursor.y) + TOOLTIP_OFFSET_Y_PX,
            cursor,
            color,
            swatch: Swatch { fill: color.to_css(), width: SWATCH_WIDTH_PX, height: SWATCH_HEIGHT_PX },
            name: name_line(name).to_string(),
            rgb: format!("RGB: {color}"),
            hex: format!("HEX: {}", color.to_hex()),
        }
    }

    /// The three text lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> [&str; 3] {
        [&self.name, &self.rgb, &self.hex]
    }
}

fn name_line(name: &NameState) -> &str {
    match name {
        NameState::Pending => LOADING_LABEL,
        NameState::Resolved(name) => name,
        NameState::Unknown => UNKNOWN_LABEL,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Shown {
    cursor: CursorPosition,
    color: PixelColor,
    name: NameState,
}

#[derive(Debug, Clone, Default)]
pub struct TooltipController {
    shown: Option<Shown>,
}

impl TooltipController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the tooltip for this cursor pixel, color, and name state.
    pub fn update(&mut self, cursor: CursorPosition, color: PixelColor, name: NameState) -> TooltipView {
        let view = TooltipView::new(cursor, color, &name);
        self.shown = Some(Shown { cursor, color, name });
        view
    }

    /// Replace the name line if the tooltip is visible and still showing `color`.
    pub fn refresh_name(&mut self, color: PixelColor, name: NameState) -> Option<TooltipView> {
        let shown = self.shown.as_mut().filter(|s| s.color == color)?;
        if shown.name == name {
            return None;
        }
        shown.name = name;
        Some(TooltipView::new(shown.cursor, shown.color, &shown.name))
    }

    /// Hide the tooltip. Returns whether it was visible.
    pub fn hide(&mut self) -> bool {
        self.shown.take().is_some()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    /// The current view, `None` while hidden.
    #[must_use]
    pub fn view(&self) -> Option<TooltipView> {
        self.shown
            .as_ref()
            .map(|s| TooltipView::new(s.cursor, s.color, &s.name))
    }
}
