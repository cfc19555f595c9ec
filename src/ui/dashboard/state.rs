//! Dashboard state management
//!
//! Contains the main dashboard state struct and related types

use super::table::{COLUMN_COUNT, GroupTable};
use crate::alarms::AlarmGroup;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::app::UIConfig;
use crate::workers::fetcher::SnapshotUpdate;

use std::collections::VecDeque;
use std::time::Instant;

/// State of the status line above the tables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub error: bool,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            text: "Waiting for first update...".to_string(),
            error: false,
        }
    }
}

/// Dashboard state: both alarm tables, the status line, and the activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// Base URL of the alarm server being watched.
    pub server_url: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Queue of snapshot updates waiting to be applied
    pub pending_updates: VecDeque<SnapshotUpdate>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Refresh cadence, shown in the header.
    pub refresh_secs: u64,
    /// Animation tick counter
    pub tick: usize,

    /// Table of unacknowledged alarms.
    active_table: GroupTable,
    /// Table of acknowledged alarms.
    acknowledged_table: GroupTable,
    /// Status line ("Last update: ..." / "Failed to fetch update: ...").
    status: StatusLine,
    /// Sequence number of the last applied snapshot update.
    last_applied_seq: u64,
    /// Which table keyboard sorting acts on.
    focused_group: AlarmGroup,
    /// Column the sort cursor is on.
    selected_column: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        environment: Environment,
        server_url: String,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            environment,
            server_url,
            start_time,
            pending_events: VecDeque::new(),
            pending_updates: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            refresh_secs: ui_config.refresh_secs,
            tick: 0,
            active_table: GroupTable::new(AlarmGroup::Active),
            acknowledged_table: GroupTable::new(AlarmGroup::Acknowledged),
            status: StatusLine::default(),
            last_applied_seq: 0,
            focused_group: AlarmGroup::Active,
            selected_column: 1,
        }
    }

    pub fn table(&self, group: AlarmGroup) -> &GroupTable {
        match group {
            AlarmGroup::Active => &self.active_table,
            AlarmGroup::Acknowledged => &self.acknowledged_table,
        }
    }

    pub(super) fn table_mut(&mut self, group: AlarmGroup) -> &mut GroupTable {
        match group {
            AlarmGroup::Active => &mut self.active_table,
            AlarmGroup::Acknowledged => &mut self.acknowledged_table,
        }
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub(super) fn set_status(&mut self, text: String, error: bool) {
        self.status = StatusLine { text, error };
    }

    pub fn last_applied_seq(&self) -> u64 {
        self.last_applied_seq
    }

    pub(super) fn set_last_applied_seq(&mut self, seq: u64) {
        self.last_applied_seq = seq;
    }

    pub fn focused_group(&self) -> AlarmGroup {
        self.focused_group
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    /// Move keyboard focus to the other table.
    pub fn toggle_focus(&mut self) {
        self.focused_group = match self.focused_group {
            AlarmGroup::Active => AlarmGroup::Acknowledged,
            AlarmGroup::Acknowledged => AlarmGroup::Active,
        };
    }

    pub fn select_next_column(&mut self) {
        self.selected_column = (self.selected_column + 1) % COLUMN_COUNT;
    }

    pub fn select_previous_column(&mut self) {
        self.selected_column = (self.selected_column + COLUMN_COUNT - 1) % COLUMN_COUNT;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    /// Add a snapshot update to the processing queue
    pub fn add_update(&mut self, update: SnapshotUpdate) {
        self.pending_updates.push_back(update);
    }
}
