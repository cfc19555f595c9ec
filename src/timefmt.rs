//! Status-line timestamp formatting.

use chrono::{DateTime, Local, TimeZone};

/// Current local wall-clock time as `YYYY-MM-DD HH:MM`.
pub fn minute_timestamp() -> String {
    format_minute(&Local::now())
}

/// Zero-padded, 24-hour, minute-resolution rendering of `time`.
pub fn format_minute<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y-%m-%d %H:%M").to_string()
}
