//! Runtime wiring for the fetch worker

use crate::consts::cli_consts::{COMMAND_QUEUE_SIZE, EVENT_QUEUE_SIZE, SNAPSHOT_QUEUE_SIZE};
use crate::events::Event;
use crate::source::AlarmSource;
use crate::workers::core::EventSender;
use crate::workers::fetcher::{FetchCommand, SnapshotFetcher, SnapshotUpdate};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the snapshot fetch worker and return its channel endpoints.
pub fn start_fetch_worker(
    source: Box<dyn AlarmSource>,
    refresh_interval: Duration,
    shutdown: broadcast::Receiver<()>,
) -> (
    mpsc::Receiver<Event>,
    mpsc::Receiver<SnapshotUpdate>,
    mpsc::Sender<FetchCommand>,
    Vec<JoinHandle<()>>,
) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (snapshot_sender, snapshot_receiver) = mpsc::channel::<SnapshotUpdate>(SNAPSHOT_QUEUE_SIZE);
    let (command_sender, command_receiver) = mpsc::channel::<FetchCommand>(COMMAND_QUEUE_SIZE);

    let fetcher = SnapshotFetcher::new(
        source,
        EventSender::new(event_sender),
        snapshot_sender,
        refresh_interval,
    );

    let handle = tokio::spawn(async move {
        fetcher.run(shutdown, command_receiver).await;
    });

    (
        event_receiver,
        snapshot_receiver,
        command_sender,
        vec![handle],
    )
}
