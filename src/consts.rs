pub mod cli_consts {
    //! Monitor Configuration Constants
    //!
    //! This module contains all configuration constants for the alarm
    //! monitor, organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of event buffer size for worker threads
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffer size for snapshot updates from the fetch worker.
    /// Only the newest update matters; the dashboard drops stale ones.
    pub const SNAPSHOT_QUEUE_SIZE: usize = 8;

    /// Buffer size for manual refresh commands to the fetch worker.
    pub const COMMAND_QUEUE_SIZE: usize = 4;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Snapshot refresh cadence and HTTP timeouts
    pub mod refresh {
        use std::time::Duration;

        /// Default interval between snapshot fetches (seconds)
        pub const DEFAULT_INTERVAL_SECS: u64 = 10;

        /// Connect timeout for requests to the alarm server (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Overall request timeout for snapshot fetches (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the connect timeout
        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
