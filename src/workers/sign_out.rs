//! Sign-out delegation
//!
//! The portal call is awaited but its outcome is not inspected beyond the
//! event message; the UI navigates to the auth screen either way.

use super::core::EventSender;
use crate::auth::Authenticator;
use crate::events::EventType;
use crate::logging::LogLevel;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Spawn a task that signs the student out and reports completion.
pub fn spawn_sign_out(
    authenticator: Arc<dyn Authenticator>,
    event_sender: EventSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match authenticator.sign_out().await {
            Ok(()) => {
                event_sender
                    .send_sign_out_event(
                        "Signed out".to_string(),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
            }
            Err(e) => {
                event_sender
                    .send_sign_out_event(
                        format!("Sign-out failed: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockAuthenticator;
    use crate::auth::error::AuthError;
    use crate::events::Worker;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_sign_out_reports_success() {
        let mut auth = MockAuthenticator::new();
        auth.expect_sign_out().times(1).returning(|| Ok(()));

        let (sender, mut receiver) = mpsc::channel(4);
        spawn_sign_out(Arc::new(auth), EventSender::new(sender))
            .await
            .unwrap();

        let event = receiver.recv().await.expect("sign-out event");
        assert_eq!(event.worker, Worker::SignOut);
        assert_eq!(event.event_type, EventType::Success);
    }

    #[tokio::test]
    async fn test_sign_out_reports_completion_on_failure() {
        let mut auth = MockAuthenticator::new();
        auth.expect_sign_out().times(1).returning(|| {
            Err(AuthError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let (sender, mut receiver) = mpsc::channel(4);
        spawn_sign_out(Arc::new(auth), EventSender::new(sender))
            .await
            .unwrap();

        // Failure still produces a terminal event so the UI can navigate.
        let event = receiver.recv().await.expect("sign-out event");
        assert_eq!(event.worker, Worker::SignOut);
        assert_eq!(event.event_type, EventType::Error);
    }
}
