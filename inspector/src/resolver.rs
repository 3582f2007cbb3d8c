//! Name resolution: debounced remote lookups that never show stale names.
//!
//! DESIGN
//! ======
//! The pointer produces a new color on every move, but the name service is
//! slow and its answers can arrive in any order. The resolver keeps a single
//! "target color" cell plus a tri-state [`NameState`] for that color:
//!
//! - `request_name` with the current target is a no-op (no redundant lookups
//!   while hovering the same color, and no re-lookup once it is resolved).
//! - A different color becomes the new target, goes `Pending`, and re-arms
//!   the quiet-period timer. Only when the timer fires does `poll` hand out a
//!   [`LookupTicket`] for the host to run.
//! - `complete` applies an outcome only if the ticket's color still equals
//!   the target. Anything else is a stale response and is dropped. In-flight
//!   lookups are never cancelled, only ignored on arrival.
//!
//! Resolution keys purely on the RGB value, not on the pixel position: two
//! positions with the same color share one lookup.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use serde::Serialize;

use crate::color::PixelColor;
use crate::consts::DEFAULT_QUIET_PERIOD_MS;
use crate::debounce::Debounce;

/// Result of the last name lookup for the current target color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "name", rename_all = "snake_case")]
pub enum NameState {
    /// Debouncing or waiting on the remote service.
    Pending,
    /// The service returned this name.
    Resolved(String),
    /// The lookup failed or the service has no name for the color.
    Unknown,
}

/// Any network, status, or payload failure from the name service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("name lookup failed: {0}")]
pub struct NameLookupFailure(pub String);

/// One issued lookup. The host resolves `color` and returns the ticket with
/// the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LookupTicket {
    /// Sequence number of the request, starting at 1.
    pub id: u64,
    pub color: PixelColor,
}

/// What `complete` did with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome matched the target and is now the current state.
    Applied(NameState),
    /// The target moved on; the outcome was discarded.
    Stale,
}

#[derive(Debug, Clone)]
pub struct NameResolver {
    debounce: Debounce,
    target: Option<PixelColor>,
    state: NameState,
    issued: u64,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD_MS)
    }
}

impl NameResolver {
    #[must_use]
    pub fn new(quiet_ms: u64) -> Self {
        Self { debounce: Debounce::new(quiet_ms), target: None, state: NameState::Pending, issued: 0 }
    }

    /// Ask for the name of `color`.
    ///
    /// Returns the re-armed timer deadline when `color` became the new target,
    /// `None` when it already was the target.
    pub fn request_name(&mut self, color: PixelColor, now_ms: u64) -> Option<u64> {
        if self.target == Some(color) {
            return None;
        }
        self.target = Some(color);
        self.state = NameState::Pending;
        Some(self.debounce.reset(now_ms))
    }

    /// Fire the timer if its quiet period has elapsed, issuing one lookup.
    pub fn poll(&mut self, now_ms: u64) -> Option<LookupTicket> {
        if !self.debounce.fire(now_ms) {
            return None;
        }
        let color = self.target?;
        self.issued += 1;
        Some(LookupTicket { id: self.issued, color })
    }

    /// Apply a lookup outcome unless it is stale.
    pub fn complete(&mut self, ticket: LookupTicket, outcome: Result<String, NameLookupFailure>) -> Resolution {
        if self.target != Some(ticket.color) {
            return Resolution::Stale;
        }
        self.state = match outcome {
            Ok(name) if !name.trim().is_empty() => NameState::Resolved(name.trim().to_string()),
            Ok(_) | Err(_) => NameState::Unknown,
        };
        // A timer still armed here was armed for this same color; the answer is already in.
        self.debounce.cancel();
        Resolution::Applied(self.state.clone())
    }

    /// Name state to display for `color`.
    #[must_use]
    pub fn state_for(&self, color: PixelColor) -> NameState {
        if self.target == Some(color) { self.state.clone() } else { NameState::Pending }
    }

    #[must_use]
    pub fn state(&self) -> &NameState {
        &self.state
    }

    #[must_use]
    pub fn target(&self) -> Option<PixelColor> {
        self.target
    }

    /// When the armed timer fires, if it is armed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.debounce.deadline()
    }

    /// Number of lookups handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued
    }
}
