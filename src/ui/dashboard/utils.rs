//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::SnapshotFetcher => Color::Cyan,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format to "MM-DD HH:MM:SS"
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let Some(month_day) = date_part.get(5..) {
            // Skip "YYYY-"
            format!("{} {}", month_day, time_part)
        } else {
            timestamp.to_string()
        }
    } else {
        timestamp.to_string()
    }
}

/// Clean HTTP error messages to show only essential information
pub fn clean_http_error_message(msg: &str) -> String {
    // Handle common HTTP error patterns with HTML content
    if msg.contains("<html>") || msg.contains("<!DOCTYPE") {
        // Extract specific HTTP status codes
        if msg.contains("502") {
            return "HTTP 502 Bad Gateway".to_string();
        }
        if msg.contains("503") {
            return "HTTP 503 Service Unavailable".to_string();
        }
        if msg.contains("504") {
            return "HTTP 504 Gateway Timeout".to_string();
        }
        if msg.contains("500") {
            return "HTTP 500 Internal Server Error".to_string();
        }
        if msg.contains("429") {
            return "HTTP 429 Rate Limited".to_string();
        }
        // Generic fallback for other HTML error responses
        return "HTTP Error (server returned HTML)".to_string();
    }

    msg.to_string()
}
