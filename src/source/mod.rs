use crate::alarms::Snapshot;
use crate::environment::Environment;
use crate::source::error::AlarmSourceError;

pub(crate) mod client;
pub use client::AlarmServerClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AlarmSource: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the current snapshot of active and acknowledged alarms.
    async fn fetch_snapshot(&self) -> Result<Snapshot, AlarmSourceError>;
}
