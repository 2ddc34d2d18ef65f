//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::auth::{Authenticator, Profile};
use crate::environment::Environment;
use crate::events::{Event as WorkerEvent, EventType, Worker};
use crate::router::{Router, routes};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::loading::render_loading;
use crate::ui::page::render_page;
use crate::ui::navigation::{BOTTOM_TABS, QUICK_ACTIONS};
use crate::workers::core::EventSender;
use crate::workers::sign_out::spawn_sign_out;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Shown until the profile loader delivers a profile.
    Loading,
    /// The dashboard shell.
    Dashboard(Box<DashboardState>),
    /// Placeholder for a navigated-to portal route; the path lives on the
    /// router.
    Page,
}

/// Application state
pub struct App {
    /// The environment in which the application is running.
    environment: Environment,

    /// Current location plus navigation requests.
    router: Router,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// The loaded profile, kept across screen changes so the dashboard can
    /// remount without refetching.
    profile: Option<Profile>,

    /// Status line shown on the loading screen.
    loading_status: String,

    /// Set while a sign-out worker is running.
    sign_out_in_flight: bool,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Sender cloned into workers spawned from the UI (sign-out).
    event_sender: mpsc::Sender<WorkerEvent>,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// Portal auth collaborator.
    authenticator: Arc<dyn Authenticator>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        event_sender: mpsc::Sender<WorkerEvent>,
        shutdown_sender: broadcast::Sender<()>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            environment,
            router: Router::new(),
            current_screen: Screen::Loading,
            profile: None,
            loading_status: "Loading your profile...".to_string(),
            sign_out_in_flight: false,
            event_receiver,
            event_sender,
            shutdown_sender,
            authenticator,
        }
    }

    /// Issue a navigation request and swap the screen to match. Leaving the
    /// dashboard drops its state, which tears down every pending deadline;
    /// returning remounts it fresh.
    fn navigate(&mut self, path: &str) {
        if self.router.current_path() == path {
            return;
        }
        self.router.navigate(path);
        self.current_screen = if path == routes::DASHBOARD {
            match &self.profile {
                Some(profile) => Screen::Dashboard(Box::new(DashboardState::new(
                    profile.clone(),
                    self.environment,
                    Instant::now(),
                ))),
                None => Screen::Loading,
            }
        } else {
            Screen::Page
        };
    }

    /// Apply a worker event to the app.
    fn handle_worker_event(&mut self, event: WorkerEvent) {
        match event.worker {
            Worker::ProfileLoader => {
                let Some(profile) = event.profile.clone() else {
                    if event.should_display() {
                        self.loading_status = event.msg;
                    }
                    return;
                };
                self.profile = Some(profile.clone());
                match &mut self.current_screen {
                    // A mounted dashboard consumes the event itself.
                    Screen::Dashboard(state) => state.add_event(event),
                    // First profile mounts the dashboard.
                    Screen::Loading => {
                        if self.router.current_path() == routes::DASHBOARD {
                            self.current_screen = Screen::Dashboard(Box::new(
                                DashboardState::new(profile, self.environment, Instant::now()),
                            ));
                        }
                    }
                    Screen::Page => {}
                }
            }
            Worker::SignOut => {
                if matches!(event.event_type, EventType::Success | EventType::Error) {
                    // Navigation happens regardless of the sign-out outcome.
                    self.sign_out_in_flight = false;
                    self.profile = None;
                    self.navigate(routes::AUTH);
                }
            }
        }
    }

    /// Handle a key press for the current screen.
    fn handle_key(&mut self, code: KeyCode) {
        // Bottom tabs work on every screen that renders them.
        if let KeyCode::Char(c @ '1'..='4') = code {
            if !matches!(self.current_screen, Screen::Loading) {
                let index = (c as u8 - b'1') as usize;
                self.navigate(BOTTOM_TABS[index].path);
                return;
            }
        }

        if let Screen::Dashboard(state) = &mut self.current_screen {
            let now = Instant::now();
            match code {
                KeyCode::Char('t') => state.toggle_theme(now),
                KeyCode::Char('x') => state.dismiss_quote(),
                KeyCode::Char('m') => state.tap_mascot(now),
                KeyCode::Char('?') => state.tutorial.open(),
                KeyCode::Enter if state.tutorial.is_open() => state.tutorial.advance(),
                KeyCode::Char(c @ '5'..='8') => {
                    let index = (c as u8 - b'5') as usize;
                    self.navigate(QUICK_ACTIONS[index].path);
                }
                KeyCode::Char('o') if !self.sign_out_in_flight => {
                    self.sign_out_in_flight = true;
                    spawn_sign_out(
                        self.authenticator.clone(),
                        EventSender::new(self.event_sender.clone()),
                    );
                }
                _ => {}
            }
        }
    }

    /// Whether Esc should quit rather than close the tutorial overlay.
    fn esc_quits(&self) -> bool {
        match &self.current_screen {
            Screen::Dashboard(state) => !state.tutorial.is_open(),
            _ => true,
        }
    }

    fn close_tutorial(&mut self) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.tutorial.close();
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // UI event loop
    loop {
        // Queue all incoming worker events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.handle_worker_event(event);
        }

        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update(Instant::now());
        }
        terminal.draw(|f| render(f, &app))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events; Esc closes the tutorial first.
                match key.code {
                    KeyCode::Char('q') => {
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }
                    KeyCode::Esc => {
                        if app.esc_quits() {
                            let _ = app.shutdown_sender.send(());
                            return Ok(());
                        }
                        app.close_tutorial();
                        continue;
                    }
                    _ => {}
                }

                app.handle_key(key.code);
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match &app.current_screen {
        Screen::Loading => render_loading(f, &app.loading_status),
        Screen::Dashboard(state) => render_dashboard(f, state, app.router.current_path()),
        Screen::Page => render_page(f, app.router.current_path()),
    }
}
