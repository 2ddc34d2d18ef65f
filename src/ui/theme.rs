//! Theme state and palettes
//!
//! The ambient flag is the process-wide analog of the portal's root
//! dark-mode class: seeded once at startup, mirrored by the dashboard at
//! mount, and written exclusively by the dashboard afterwards.

use crate::consts::cli_consts::theme;
use crate::ui::timer::OneShot;
use ratatui::prelude::Color;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static AMBIENT_DARK: AtomicBool = AtomicBool::new(false);

/// Seed the ambient flag at process start.
pub fn init_ambient(dark: bool) {
    AMBIENT_DARK.store(dark, Ordering::Relaxed);
}

/// Read the ambient flag. Screens without their own theme state (loading,
/// navigated-to pages) render with this.
pub fn ambient_dark() -> bool {
    AMBIENT_DARK.load(Ordering::Relaxed)
}

fn set_ambient_dark(dark: bool) {
    AMBIENT_DARK.store(dark, Ordering::Relaxed);
}

/// Dashboard-owned theme state with the transient toggle window.
#[derive(Debug)]
pub struct ThemeState {
    dark: bool,
    transition: Option<OneShot>,
}

impl ThemeState {
    /// Mirror the ambient flag at dashboard mount.
    pub fn from_ambient() -> Self {
        Self::new(ambient_dark())
    }

    pub fn new(dark: bool) -> Self {
        Self {
            dark,
            transition: None,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip the theme and open a fresh transition window. Toggling inside
    /// an open window replaces the pending clear deadline, so the marker
    /// clears relative to the last toggle.
    pub fn toggle(&mut self, now: Instant) {
        self.dark = !self.dark;
        set_ambient_dark(self.dark);
        self.transition = Some(OneShot::after(now, theme::transition_window()));
    }

    /// Clear the transition window once its deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if self.transition.is_some_and(|t| t.is_due(now)) {
            self.transition = None;
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.dark)
    }
}

/// Colors used by the renderer for the current theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub muted: Color,
    pub primary: Color,
    pub accent: Color,
}

impl Palette {
    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(248, 248, 245),
            panel: Color::Rgb(255, 255, 255),
            text: Color::Rgb(28, 28, 30),
            muted: Color::Rgb(110, 110, 115),
            primary: Color::Rgb(121, 68, 160),
            accent: Color::Rgb(201, 162, 39),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(16, 20, 24),
            panel: Color::Rgb(28, 33, 40),
            text: Color::Rgb(230, 230, 235),
            muted: Color::Rgb(140, 140, 150),
            primary: Color::Rgb(178, 132, 220),
            accent: Color::Rgb(222, 186, 80),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    // Toggling writes the process-wide ambient flag; serialize the tests
    // that do so.
    static AMBIENT_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_toggle_flips_exactly_once_per_call() {
        let _guard = AMBIENT_LOCK.lock().unwrap();
        let t0 = Instant::now();
        let mut theme = ThemeState::new(false);
        theme.toggle(t0);
        assert!(theme.is_dark());
        theme.toggle(t0 + Duration::from_millis(10));
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_transition_clears_after_window() {
        let _guard = AMBIENT_LOCK.lock().unwrap();
        let t0 = Instant::now();
        let mut theme = ThemeState::new(false);
        theme.toggle(t0);
        assert!(theme.is_transitioning());

        theme.tick(t0 + Duration::from_millis(299));
        assert!(theme.is_transitioning());

        theme.tick(t0 + Duration::from_millis(300));
        assert!(!theme.is_transitioning());
    }

    #[test]
    // A second toggle inside the window restarts the countdown; the marker
    // clears relative to the last toggle.
    fn test_overlapping_toggles_clear_from_last_toggle() {
        let _guard = AMBIENT_LOCK.lock().unwrap();
        let t0 = Instant::now();
        let mut theme = ThemeState::new(false);
        theme.toggle(t0);
        theme.toggle(t0 + Duration::from_millis(200));

        theme.tick(t0 + Duration::from_millis(400));
        assert!(theme.is_transitioning());

        theme.tick(t0 + Duration::from_millis(500));
        assert!(!theme.is_transitioning());
    }

    #[test]
    fn test_toggle_writes_ambient_flag() {
        let _guard = AMBIENT_LOCK.lock().unwrap();
        let t0 = Instant::now();
        let mut theme = ThemeState::new(ambient_dark());
        let before = ambient_dark();
        theme.toggle(t0);
        assert_eq!(ambient_dark(), !before);
        theme.toggle(t0 + Duration::from_millis(1));
        assert_eq!(ambient_dark(), before);
    }
}
