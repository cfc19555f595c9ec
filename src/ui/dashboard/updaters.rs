//! Dashboard state update logic
//!
//! Applies queued worker events and snapshot updates to the dashboard

use super::state::DashboardState;
use super::table::SortDirection;
use crate::events::{Event as WorkerEvent, EventType, Worker};
use crate::timefmt::minute_timestamp;
use crate::workers::fetcher::SnapshotUpdate;

impl DashboardState {
    /// Update the dashboard state with new tick, events, and snapshots.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(&event);
        }

        // Apply queued snapshot updates; the seq guard drops stale ones
        while let Some(update) = self.pending_updates.pop_front() {
            self.apply_update(update);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        match event.worker {
            Worker::SnapshotFetcher => {
                if event.event_type == EventType::Error {
                    // The tables keep showing the previous snapshot; only the
                    // status line flags the failed refresh.
                    self.set_status(
                        format!("Failed to fetch update: {}", minute_timestamp()),
                        true,
                    );
                }
            }
        }
    }

    /// Apply one snapshot update to both tables.
    ///
    /// Updates are tagged with the order their refresh was issued in; an
    /// update that is not newer than the last applied one is a stale response
    /// and is discarded. Returns whether the update was applied.
    pub fn apply_update(&mut self, update: SnapshotUpdate) -> bool {
        if update.seq <= self.last_applied_seq() {
            return false;
        }
        self.set_last_applied_seq(update.seq);

        let SnapshotUpdate { snapshot, .. } = update;
        self.table_mut(crate::alarms::AlarmGroup::Active)
            .apply_snapshot(snapshot.active);
        self.table_mut(crate::alarms::AlarmGroup::Acknowledged)
            .apply_snapshot(snapshot.acknowledged);

        self.set_status(format!("Last update: {}", minute_timestamp()), false);
        true
    }

    /// Sort the focused table by the selected column. A second request on an
    /// already-ascending column flips to descending.
    pub fn sort_selected(&mut self) {
        use super::table::HeaderMark;

        let column = self.selected_column();
        let group = self.focused_group();
        let table = self.table_mut(group);
        let direction = if table.mark(column) == HeaderMark::Sorted {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        table.apply_sort(column, direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarms::{AlarmGroup, AlarmRecord, Severity, Snapshot};
    use crate::environment::Environment;
    use crate::error_classifier::LogLevel;
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::table::{HeaderMark, TableBody};
    use std::time::Instant;

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Environment::Local.alarm_server_url(),
            Instant::now(),
            UIConfig::new(false, 10),
        )
    }

    fn record(name: &str, severity: Severity) -> AlarmRecord {
        AlarmRecord {
            name: name.to_string(),
            description: "test point".to_string(),
            severity,
            message: "HIHI_ALARM".to_string(),
            time: "2024-03-05 09:07:13.201".to_string(),
            value: "12.5".to_string(),
            current_severity: severity,
            current_message: "HIHI_ALARM".to_string(),
        }
    }

    fn update(seq: u64, active: Vec<AlarmRecord>, acknowledged: Vec<AlarmRecord>) -> SnapshotUpdate {
        SnapshotUpdate {
            seq,
            snapshot: Snapshot {
                active,
                acknowledged,
            },
        }
    }

    #[test]
    /// Spec scenario: empty active group, one MAJOR acknowledged alarm.
    fn test_apply_update_renders_both_groups() {
        let mut state = state();
        let applied = state.apply_update(update(1, vec![], vec![record("PV1", Severity::Major)]));
        assert!(applied);

        assert_eq!(
            state.table(AlarmGroup::Active).body(),
            TableBody::Placeholder("- There are no active alarms -".to_string())
        );
        let acked = state.table(AlarmGroup::Acknowledged);
        assert_eq!(acked.display_row_count(), 1);
        assert_eq!(acked.records()[0].severity, Severity::Major);
        assert_eq!(acked.records()[0].severity.marker(), Some("❌"));

        let status = state.status();
        assert!(!status.error);
        assert!(status.text.starts_with("Last update: "));
    }

    #[test]
    /// Status text carries a minute-resolution timestamp.
    fn test_status_timestamp_format() {
        let mut state = state();
        state.apply_update(update(1, vec![], vec![]));
        let text = state.status().text.clone();
        let stamp = text.strip_prefix("Last update: ").unwrap();
        assert_eq!(stamp.len(), 16);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[13..14], ":");
    }

    #[test]
    /// A stale response must not clobber a fresher snapshot.
    fn test_stale_update_is_discarded() {
        let mut state = state();
        assert!(state.apply_update(update(2, vec![record("PV2", Severity::Minor)], vec![])));
        let fresh_status = state.status().clone();

        // Response to an older refresh arrives late.
        assert!(!state.apply_update(update(1, vec![record("PV1", Severity::Major)], vec![])));
        assert_eq!(state.table(AlarmGroup::Active).records()[0].name, "PV2");
        assert_eq!(state.status(), &fresh_status);

        // Same seq twice is also stale.
        assert!(!state.apply_update(update(2, vec![], vec![])));
    }

    #[test]
    /// Fetch failure: error status line, tables untouched.
    fn test_fetch_error_sets_status_and_keeps_tables() {
        let mut state = state();
        state.apply_update(update(1, vec![record("PV1", Severity::Major)], vec![]));

        state.add_event(WorkerEvent::fetcher_with_level(
            "Failed to fetch update: connection refused".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update();

        let status = state.status();
        assert!(status.error);
        let stamp = status.text.strip_prefix("Failed to fetch update: ").unwrap();
        assert_eq!(stamp.len(), 16);

        // Previous rows stay on screen.
        assert_eq!(state.table(AlarmGroup::Active).records().len(), 1);
        assert_eq!(state.activity_logs.len(), 1);
    }

    #[test]
    /// The chosen sort order survives a snapshot replacement.
    fn test_sort_survives_refresh() {
        let mut state = state();
        state.apply_update(update(1, vec![record("PV1", Severity::Major)], vec![]));

        // Viewer sorts the active table descending by name.
        state.sort_selected();
        state.sort_selected();
        assert_eq!(
            state.table(AlarmGroup::Active).mark(1),
            HeaderMark::SortedReverse
        );

        state.apply_update(update(
            2,
            vec![record("PV4", Severity::Minor), record("PV9", Severity::Minor)],
            vec![],
        ));
        let names: Vec<&str> = state
            .table(AlarmGroup::Active)
            .records()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["PV9", "PV4"]);
    }

    #[test]
    fn test_focus_and_column_cursor() {
        let mut state = state();
        assert_eq!(state.focused_group(), AlarmGroup::Active);
        state.toggle_focus();
        assert_eq!(state.focused_group(), AlarmGroup::Acknowledged);

        assert_eq!(state.selected_column(), 1);
        state.select_previous_column();
        assert_eq!(state.selected_column(), 0);
        state.select_previous_column();
        assert_eq!(state.selected_column(), 8);
        state.select_next_column();
        assert_eq!(state.selected_column(), 0);
    }
}
