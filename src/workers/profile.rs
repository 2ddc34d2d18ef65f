//! Profile loading with bounded retry

use super::core::EventSender;
use crate::auth::Authenticator;
use crate::consts::cli_consts::profile_fetch;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Fetches the student profile, retrying transient failures with a linear
/// backoff. The worker stops as soon as the shutdown channel fires.
pub struct ProfileLoader {
    authenticator: Arc<dyn Authenticator>,
    event_sender: EventSender,
}

impl ProfileLoader {
    pub fn new(authenticator: Arc<dyn Authenticator>, event_sender: EventSender) -> Self {
        Self {
            authenticator,
            event_sender,
        }
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        self.event_sender
            .send_profile_event(
                "Loading your profile...".to_string(),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        let mut attempt: u32 = 0;
        loop {
            let result = tokio::select! {
                _ = shutdown.recv() => return,
                result = self.authenticator.fetch_profile() => result,
            };

            match result {
                Ok(profile) => {
                    self.event_sender
                        .send_event(Event::profile_loaded(profile))
                        .await;
                    return;
                }
                Err(e) => {
                    attempt += 1;
                    if attempt > profile_fetch::MAX_RETRIES {
                        self.event_sender
                            .send_profile_event(
                                format!("Could not load your profile: {}", e),
                                EventType::Error,
                                LogLevel::Error,
                            )
                            .await;
                        return;
                    }
                    self.event_sender
                        .send_profile_event(
                            format!("Loading your profile (attempt {})...", attempt + 1),
                            EventType::Waiting,
                            LogLevel::Info,
                        )
                        .await;
                    let backoff = profile_fetch::initial_backoff() * attempt;
                    tokio::select! {
                        _ = shutdown.recv() => return,
                        _ = sleep(backoff) => {}
                    }
                }
            }
        }
    }
}

/// Spawn the profile loader on the runtime.
pub fn spawn_profile_loader(
    authenticator: Arc<dyn Authenticator>,
    event_sender: EventSender,
    shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    let loader = ProfileLoader::new(authenticator, event_sender);
    tokio::spawn(async move { loader.run(shutdown).await })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::error::AuthError;
    use crate::auth::{MockAuthenticator, Profile};
    use crate::events::Worker;
    use tokio::sync::mpsc;

    fn test_profile() -> Profile {
        Profile {
            name: "Jane Doe".to_string(),
            section: "St. Agnes".to_string(),
            profile_picture_url: None,
        }
    }

    #[tokio::test]
    async fn test_loader_delivers_profile_event() {
        let mut auth = MockAuthenticator::new();
        auth.expect_fetch_profile()
            .times(1)
            .returning(|| Ok(test_profile()));

        let (sender, mut receiver) = mpsc::channel(8);
        let (shutdown_sender, _) = broadcast::channel(1);
        let loader = ProfileLoader::new(Arc::new(auth), EventSender::new(sender));
        loader.run(shutdown_sender.subscribe()).await;

        let first = receiver.recv().await.expect("startup event");
        assert_eq!(first.event_type, EventType::Refresh);

        let event = receiver.recv().await.expect("profile event");
        assert_eq!(event.worker, Worker::ProfileLoader);
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(event.profile, Some(test_profile()));
    }

    #[tokio::test]
    async fn test_loader_retries_then_reports_error() {
        let mut auth = MockAuthenticator::new();
        auth.expect_fetch_profile()
            .times(1 + profile_fetch::MAX_RETRIES as usize)
            .returning(|| {
                Err(AuthError::Http {
                    status: 503,
                    message: "unavailable".to_string(),
                })
            });

        let (sender, mut receiver) = mpsc::channel(16);
        let (shutdown_sender, _) = broadcast::channel(1);
        let loader = ProfileLoader::new(Arc::new(auth), EventSender::new(sender));

        tokio::time::pause();
        let run = tokio::spawn(loader.run(shutdown_sender.subscribe()));

        let mut last = None;
        while let Some(event) = receiver.recv().await {
            last = Some(event);
        }
        run.await.unwrap();

        let last = last.expect("at least one event");
        assert_eq!(last.event_type, EventType::Error);
        assert!(last.profile.is_none());
    }
}
