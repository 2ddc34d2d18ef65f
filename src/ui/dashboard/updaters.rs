//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events, timers,
//! and user input

use super::state::DashboardState;

use crate::events::Event as WorkerEvent;

use std::time::Instant;

impl DashboardState {
    /// Advance the dashboard to `now`: drain queued worker events first,
    /// then let the timer-driven state observe the clock. Input handled
    /// before this call is always visible to the deadlines checked here.
    pub fn update(&mut self, now: Instant) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
        }

        self.notice.tick(now, &mut self.rng);
        self.theme.tick(now);
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        // A re-fetched profile replaces the one on display.
        if let Some(profile) = &event.profile {
            self.profile = profile.clone();
        }
    }

    // ---- user input -------------------------------------------------------

    /// Flip the theme; the header icon animates until the window clears.
    pub fn toggle_theme(&mut self, now: Instant) {
        self.theme.toggle(now);
    }

    /// Close the quote bubble.
    pub fn dismiss_quote(&mut self) {
        self.notice.dismiss();
    }

    /// Tap the mascot: new quote, fresh auto-hide countdown.
    pub fn tap_mascot(&mut self, now: Instant) {
        self.notice.retrigger(now, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Profile;
    use crate::environment::Environment;
    use crate::events::Event;
    use crate::quotes::QUOTES;
    use std::time::Duration;

    fn test_profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            section: "St. Agnes".to_string(),
            profile_picture_url: None,
        }
    }

    fn mounted_at(t0: Instant) -> DashboardState {
        DashboardState::with_seeded_rng(test_profile("Jane Doe"), Environment::Local, t0, 3)
    }

    const REVEAL: Duration = Duration::from_millis(1_500);
    const HIDE: Duration = Duration::from_millis(8_000);

    #[test]
    // The full bubble scenario: mount, reveal, tap the mascot, auto-hide
    // eight seconds after the tap.
    fn test_quote_bubble_full_cycle() {
        let t0 = Instant::now();
        let mut state = mounted_at(t0);

        state.update(t0 + Duration::from_millis(100));
        assert!(!state.notice.is_visible());

        state.update(t0 + REVEAL);
        assert!(state.notice.is_visible());
        assert!(QUOTES.contains(state.notice.current()));

        let tap = t0 + REVEAL + Duration::from_secs(2);
        state.tap_mascot(tap);
        state.update(t0 + REVEAL + HIDE);
        assert!(state.notice.is_visible());

        state.update(tap + HIDE);
        assert!(!state.notice.is_visible());
    }

    #[test]
    // Dismiss handled before an update pass wins over the stale auto-hide
    // deadline observed by it.
    fn test_dismiss_applies_before_stale_deadlines() {
        let t0 = Instant::now();
        let mut state = mounted_at(t0);

        state.update(t0 + REVEAL);
        state.dismiss_quote();
        state.update(t0 + REVEAL + HIDE + Duration::from_secs(5));
        assert!(!state.notice.is_visible());
    }

    #[test]
    fn test_profile_event_replaces_display_profile() {
        let t0 = Instant::now();
        let mut state = mounted_at(t0);

        state.add_event(Event::profile_loaded(test_profile("John Smith")));
        state.update(t0 + Duration::from_millis(100));
        assert_eq!(state.profile.name, "John Smith");
    }

    #[test]
    fn test_update_advances_tick() {
        let t0 = Instant::now();
        let mut state = mounted_at(t0);
        state.update(t0 + Duration::from_millis(100));
        state.update(t0 + Duration::from_millis(200));
        assert_eq!(state.tick, 2);
    }
}
