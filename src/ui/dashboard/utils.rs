//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use crate::plant::HealthStatus;
use ratatui::prelude::Color;

/// Longest activity message shown before truncation
const MAX_LOG_MESSAGE_CHARS: usize = 160;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Poller => Color::Cyan,
        Worker::ImageProbe => Color::LightMagenta,
    }
}

/// Terminal color for a health status: green, yellow or gray.
pub fn get_health_color(health: HealthStatus) -> Color {
    match health {
        HealthStatus::Healthy => Color::Green,
        HealthStatus::Unhealthy => Color::Yellow,
        HealthStatus::Unknown => Color::Gray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8))
        {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Request timed out") {
        return "Request timed out - will retry on next poll".to_string();
    }
    if msg.contains("Network error") {
        return "Network error - will retry on next poll".to_string();
    }
    if msg.chars().count() > MAX_LOG_MESSAGE_CHARS {
        let truncated: String = msg.chars().take(MAX_LOG_MESSAGE_CHARS).collect();
        return format!("{}...", truncated);
    }
    msg.to_string()
}
