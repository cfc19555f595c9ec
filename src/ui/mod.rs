//! Terminal user interface for the alarm monitor.

pub mod app;
pub mod dashboard;
pub mod splash;

pub use app::{App, UIConfig, run};
