//! Event System
//!
//! Types and implementations for worker events delivered to the UI

use crate::auth::Profile;
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that loads the student profile from the portal.
    ProfileLoader,
    /// Worker that signs the student out of the portal.
    SignOut,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Profile payload for profile-loaded events.
    pub profile: Option<Profile>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            profile: None,
        }
    }

    /// A successfully loaded profile, carried as the event payload.
    pub fn profile_loaded(profile: Profile) -> Self {
        let mut event = Self::new(
            Worker::ProfileLoader,
            format!("Loaded profile for {}", profile.name),
            EventType::Success,
            LogLevel::Info,
        );
        event.profile = Some(profile);
        event
    }

    pub fn profile_loader_with_level(
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Worker::ProfileLoader, msg, event_type, log_level)
    }

    pub fn sign_out_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::SignOut, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
