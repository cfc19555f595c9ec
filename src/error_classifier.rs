use crate::source::error::AlarmSourceError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &AlarmSourceError) -> LogLevel {
        match error {
            // Non-critical: Temporary server issues
            AlarmSourceError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            AlarmSourceError::Http { status, .. } if (500..=599).contains(status) => {
                LogLevel::Warn
            }

            // Critical: Auth problems, malformed payloads
            AlarmSourceError::Http { status, .. } if *status == 401 => LogLevel::Error,
            AlarmSourceError::Http { status, .. } if *status == 403 => LogLevel::Error,
            AlarmSourceError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
