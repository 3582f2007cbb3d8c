//! Cancel-and-reschedule single-shot timer.
//!
//! Time is a caller-supplied monotonic millisecond counter, so the same timer
//! runs under a browser clock, a tokio clock, or a test's hand-advanced clock.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Fires once after `quiet_ms` of no further `reset` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debounce {
    quiet_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    #[must_use]
    pub fn new(quiet_ms: u64) -> Self {
        Self { quiet_ms, deadline: None }
    }

    /// Restart the quiet period at `now_ms`. Returns the new deadline.
    pub fn reset(&mut self, now_ms: u64) -> u64 {
        let deadline = now_ms.saturating_add(self.quiet_ms);
        self.deadline = Some(deadline);
        deadline
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// The pending deadline, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// `true` exactly once, on the first call at or after the deadline.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
