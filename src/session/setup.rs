//! Session setup and initialization

use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::start_fetch_worker;
use crate::source::AlarmServerClient;
use crate::workers::fetcher::{FetchCommand, SnapshotUpdate};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Snapshot updates from the fetch worker
    pub snapshot_receiver: mpsc::Receiver<SnapshotUpdate>,
    /// Manual refresh requests to the fetch worker
    pub command_sender: mpsc::Sender<FetchCommand>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Environment being watched
    pub environment: Environment,
    /// Base URL of the alarm server
    pub server_url: String,
    /// Refresh cadence in seconds (for display purposes)
    pub refresh_secs: u64,
}

/// Sets up a monitoring session
///
/// Common setup for both TUI and headless modes:
/// 1. Builds the alarm server client
/// 2. Sets up the shutdown channel
/// 3. Starts the snapshot fetch worker
pub fn setup_session(environment: Environment, server_url: String, refresh_secs: u64) -> SessionData {
    let client = AlarmServerClient::with_base_url(environment, server_url.clone());

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, snapshot_receiver, command_sender, join_handles) = start_fetch_worker(
        Box::new(client),
        Duration::from_secs(refresh_secs),
        shutdown_sender.subscribe(),
    );

    SessionData {
        event_receiver,
        snapshot_receiver,
        command_sender,
        join_handles,
        shutdown_sender,
        environment,
        server_url,
        refresh_secs,
    }
}
