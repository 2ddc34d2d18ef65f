//! Session setup and initialization

use crate::auth::{Authenticator, PortalClient};
use crate::config::Config;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::events::Event;
use crate::workers::core::EventSender;
use crate::workers::profile::spawn_profile_loader;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data shared between setup and the UI loop
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Event sender handed to workers spawned after setup (sign-out)
    pub event_sender: mpsc::Sender<Event>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Portal auth collaborator
    pub authenticator: Arc<dyn Authenticator>,
    /// The environment the session talks to
    pub environment: Environment,
}

/// Sets up a portal session
///
/// This function handles the common setup for the TUI:
/// 1. Builds the portal client from the saved session, if any
/// 2. Sets up event and shutdown channels
/// 3. Starts the profile loader worker
/// 4. Returns session data for the UI loop
pub async fn setup_session(
    config: Option<Config>,
    env: Environment,
) -> Result<SessionData, Box<dyn Error>> {
    let session_token = config.map(|c| c.session_token);
    let authenticator: Arc<dyn Authenticator> =
        Arc::new(PortalClient::new(env, session_token));

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

    let handle = spawn_profile_loader(
        authenticator.clone(),
        EventSender::new(event_sender.clone()),
        shutdown_sender.subscribe(),
    );

    Ok(SessionData {
        event_receiver,
        event_sender,
        join_handles: vec![handle],
        shutdown_sender,
        authenticator,
        environment: env,
    })
}
