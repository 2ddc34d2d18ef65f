//! Quote notice state machine
//!
//! Drives the mascot speech bubble: a delayed reveal after the dashboard
//! mounts, an auto-hide window, manual dismiss, and manual re-trigger. All
//! deadlines are owned by the current phase, so replacing or dropping the
//! phase cancels them.

use crate::consts::cli_consts::quote_notice;
use crate::quotes::{self, Quote};
use crate::ui::timer::OneShot;
use rand::Rng;
use std::time::Instant;

/// Visibility phase of the quote bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    /// No bubble on screen and no reveal pending.
    Hidden,
    /// Mounted, waiting for the initial reveal deadline.
    Pending { reveal: OneShot },
    /// Bubble on screen, waiting for the auto-hide deadline.
    Visible { hide: OneShot },
}

#[derive(Debug)]
pub struct QuoteNotice {
    phase: NoticePhase,
    current: Quote,
}

impl QuoteNotice {
    /// Schedule the initial reveal relative to the mount instant.
    pub fn new(now: Instant) -> Self {
        Self {
            phase: NoticePhase::Pending {
                reveal: OneShot::after(now, quote_notice::reveal_delay()),
            },
            current: quotes::default_quote(),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, NoticePhase::Visible { .. })
    }

    pub fn current(&self) -> &Quote {
        &self.current
    }

    #[allow(unused)]
    pub fn phase(&self) -> NoticePhase {
        self.phase
    }

    /// Advance the machine to `now`, drawing a fresh quote on reveal.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        match self.phase {
            NoticePhase::Pending { reveal } if reveal.is_due(now) => {
                self.current = quotes::pick_random(rng);
                self.phase = NoticePhase::Visible {
                    hide: OneShot::after(now, quote_notice::auto_hide()),
                };
            }
            NoticePhase::Visible { hide } if hide.is_due(now) => {
                self.phase = NoticePhase::Hidden;
            }
            _ => {}
        }
    }

    /// Hide the bubble now. The pending auto-hide deadline dies with the
    /// `Visible` phase.
    pub fn dismiss(&mut self) {
        if self.is_visible() {
            self.phase = NoticePhase::Hidden;
        }
    }

    /// Replace the quote and restart the auto-hide countdown from `now`.
    /// Only meaningful while the bubble is visible.
    pub fn retrigger<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        if self.is_visible() {
            self.current = quotes::pick_random(rng);
            self.phase = NoticePhase::Visible {
                hide: OneShot::after(now, quote_notice::auto_hide()),
            };
        }
    }
}
