//! Dashboard state management
//!
//! Contains the main dashboard state struct

use crate::auth::Profile;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::notice::QuoteNotice;
use crate::ui::theme::ThemeState;
use crate::ui::tutorial::TutorialState;

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::time::Instant;

/// State owned by a mounted dashboard. Dropping it tears down every
/// pending deadline with it.
#[derive(Debug)]
pub struct DashboardState {
    /// The student profile shown in the welcome panel.
    pub profile: Profile,
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The mount time of the dashboard, used for computing uptime.
    pub start_time: Instant,
    /// Animation tick counter
    pub tick: usize,
    /// Theme flag plus the transient toggle window.
    pub theme: ThemeState,
    /// The mascot quote bubble state machine.
    pub notice: QuoteNotice,
    /// Tutorial overlay visibility.
    pub tutorial: TutorialState,
    /// Queue of worker events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,

    /// Random source for quote draws.
    pub(super) rng: StdRng,
}

impl DashboardState {
    /// Mounts a new dashboard at `now`. Scheduling the quote reveal is the
    /// only timer work done here.
    pub fn new(profile: Profile, environment: Environment, now: Instant) -> Self {
        Self {
            profile,
            environment,
            start_time: now,
            tick: 0,
            theme: ThemeState::from_ambient(),
            notice: QuoteNotice::new(now),
            tutorial: TutorialState::default(),
            pending_events: VecDeque::new(),
            rng: StdRng::from_entropy(),
        }
    }

    #[cfg(test)]
    pub fn with_seeded_rng(
        profile: Profile,
        environment: Environment,
        now: Instant,
        seed: u64,
    ) -> Self {
        let mut state = Self::new(profile, environment, now);
        state.rng = StdRng::seed_from_u64(seed);
        state
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
