//! Snapshot polling worker

use super::core::EventSender;
use crate::alarms::Snapshot;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::EventType;
use crate::source::AlarmSource;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// One refresh result, tagged with the order the refresh was issued in.
///
/// The dashboard applies an update only if its `seq` is newer than the last
/// one applied, so a slow response can never clobber a fresher snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotUpdate {
    pub seq: u64,
    pub snapshot: Snapshot,
}

/// Commands the UI can send to the fetch worker.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FetchCommand {
    /// Fetch a snapshot now instead of waiting for the next interval tick.
    RefreshNow,
}

/// Polls the alarm source on an interval and on explicit refresh commands.
///
/// Fetch failures are fully contained: they surface as Error events (and a
/// status-line change downstream), never as a worker exit.
pub struct SnapshotFetcher {
    source: Box<dyn AlarmSource>,
    event_sender: EventSender,
    snapshot_sender: mpsc::Sender<SnapshotUpdate>,
    classifier: ErrorClassifier,
    interval: Duration,
    seq: u64,
}

impl SnapshotFetcher {
    pub fn new(
        source: Box<dyn AlarmSource>,
        event_sender: EventSender,
        snapshot_sender: mpsc::Sender<SnapshotUpdate>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            event_sender,
            snapshot_sender,
            classifier: ErrorClassifier::new(),
            interval,
            seq: 0,
        }
    }

    pub async fn run(
        mut self,
        mut shutdown: broadcast::Receiver<()>,
        mut commands: mpsc::Receiver<FetchCommand>,
    ) {
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.refresh().await;
                }
                Some(FetchCommand::RefreshNow) = commands.recv() => {
                    self.refresh().await;
                    ticker.reset();
                }
                _ = shutdown.recv() => {
                    break;
                }
            }
        }
    }

    /// Issue one fetch and report the outcome. One request per call, no retry.
    pub async fn refresh(&mut self) {
        self.seq += 1;
        let seq = self.seq;

        self.event_sender
            .send_fetch_event(
                "Refreshing alarms...".to_string(),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;

        match self.source.fetch_snapshot().await {
            Ok(snapshot) => {
                self.event_sender
                    .send_fetch_event(
                        format!(
                            "Fetched {} active / {} acknowledged alarms",
                            snapshot.active.len(),
                            snapshot.acknowledged.len()
                        ),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;

                let _ = self.snapshot_sender.send(SnapshotUpdate { seq, snapshot }).await;
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.event_sender
                    .send_fetch_event(
                        format!("Failed to fetch update: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }
    }
}
