//! One-shot timers scoped to the state that owns them
//!
//! Deadlines are plain values polled from the UI update pass with an
//! explicit `now`. Dropping or replacing the owner drops the handle, so a
//! deadline can never be observed after its scope ends.

use std::time::{Duration, Instant};

/// A cancelable one-shot deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    deadline: Instant,
}

impl OneShot {
    /// Schedule a deadline `delay` after `now`.
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    /// Whether the deadline has been reached at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}
