use crate::color::PixelColor;
use crate::consts::DEFAULT_QUIET_PERIOD_MS;
use crate::input::{CursorPosition, Point, PointerTracker};
use crate::raster::RasterImage;
use crate::resolver::{LookupTicket, NameLookupFailure, NameResolver, NameState, Resolution};
use crate::surface::{PixelSurface, SurfaceError};
use crate::tooltip::{TooltipController, TooltipView};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show (or move) the tooltip with this content.
    ShowTooltip(TooltipView),
    /// Hide the tooltip.
    HideTooltip,
    /// The debounce timer is armed; call `on_tick` at or after `deadline_ms`.
    ArmTimer { deadline_ms: u64 },
    /// Look up the name for `ticket.color` and report back via `on_name_resolved`.
    FetchName(LookupTicket),
}

/// The pixel currently under the pointer and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub position: CursorPosition,
    pub color: PixelColor,
}

/// Engine state: surface, tracker, resolver, and tooltip behind one set of inputs.
///
/// Performs no I/O. The host renders the raster, owns the clock, and carries
/// out the returned [`Action`]s.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub surface: PixelSurface,
    pub tracker: PointerTracker,
    pub resolver: NameResolver,
    pub tooltip: TooltipController,
    sample: Option<Sample>,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_quiet_period(DEFAULT_QUIET_PERIOD_MS)
    }

    /// An engine whose name lookups wait for `quiet_ms` of color stability.
    #[must_use]
    pub fn with_quiet_period(quiet_ms: u64) -> Self {
        Self { resolver: NameResolver::new(quiet_ms), ..Self::default() }
    }

    // --- Data inputs ---

    /// Take the one-shot raster handoff from the image host.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::AlreadyLoaded`] if an image was already loaded.
    pub fn load(&mut self, image: &RasterImage) -> Result<(), SurfaceError> {
        self.surface.load(image)?;
        self.tracker.set_size(image.width(), image.height());
        Ok(())
    }

    /// Client-space position of the surface's top-left corner.
    pub fn set_origin(&mut self, origin: Point) {
        self.tracker.set_origin(origin);
    }

    // --- Pointer input ---

    /// Sample the pixel under the pointer and update the tooltip immediately.
    pub fn on_pointer_move(&mut self, client: Point, now_ms: u64) -> Vec<Action> {
        let Some(position) = self.tracker.locate(client) else {
            return self.on_pointer_leave();
        };
        // Cannot fail after `locate`; hide if it ever does.
        let Ok(color) = self.surface.sample_at(i64::from(position.x), i64::from(position.y)) else {
            return self.on_pointer_leave();
        };
        self.sample = Some(Sample { position, color });

        let mut actions = Vec::with_capacity(2);
        let armed = self.resolver.request_name(color, now_ms);
        let view = self
            .tooltip
            .update(position, color, self.resolver.state_for(color));
        actions.push(Action::ShowTooltip(view));
        if let Some(deadline_ms) = armed {
            actions.push(Action::ArmTimer { deadline_ms });
        }
        actions
    }

    /// Hide the tooltip. Name resolution carries on in the background.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.sample = None;
        if self.tooltip.hide() { vec![Action::HideTooltip] } else { Vec::new() }
    }

    // --- Timer / network ---

    /// Let the debounce timer fire if its deadline has passed.
    pub fn on_tick(&mut self, now_ms: u64) -> Vec<Action> {
        self.resolver
            .poll(now_ms)
            .map(Action::FetchName)
            .into_iter()
            .collect()
    }

    /// Feed back the outcome of a `FetchName` action.
    pub fn on_name_resolved(&mut self, ticket: LookupTicket, outcome: Result<String, NameLookupFailure>) -> Vec<Action> {
        match self.resolver.complete(ticket, outcome) {
            Resolution::Stale => Vec::new(),
            Resolution::Applied(state) => self
                .tooltip
                .refresh_name(ticket.color, state)
                .map(Action::ShowTooltip)
                .into_iter()
                .collect(),
        }
    }

    // --- Queries ---

    /// When the host should next call `on_tick`, if ever.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.resolver.next_deadline()
    }

    /// The pixel and color under the pointer, if it is over the surface.
    #[must_use]
    pub fn sample(&self) -> Option<Sample> {
        self.sample
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<TooltipView> {
        self.tooltip.view()
    }

    /// Name state for the color currently under the pointer.
    #[must_use]
    pub fn name_state(&self) -> Option<NameState> {
        self.sample.map(|s| self.resolver.state_for(s.color))
    }
}
