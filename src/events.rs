//! Event System
//!
//! Activity events emitted by the background workers and shown in the logs

use crate::logging::LogLevel;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that fetches the plant status on every tick.
    Poller,
    /// Worker that checks whether the captured image can be loaded.
    ImageProbe,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn poller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Poller, msg, event_type, log_level)
    }

    pub fn image_probe_with_level(
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Worker::ImageProbe, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        self.log_level.passes(LogLevel::threshold())
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_info_events_always_display() {
        let success =
            Event::poller_with_level("ok".to_string(), EventType::Success, LogLevel::Debug);
        let info = Event::image_probe_with_level(
            "checking".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        );
        assert!(success.should_display());
        assert!(info.should_display());
    }

    #[test]
    fn test_display_format() {
        let event =
            Event::poller_with_level("boom".to_string(), EventType::Error, LogLevel::Warn);
        let rendered = event.to_string();
        assert!(rendered.starts_with("Error ["));
        assert!(rendered.ends_with("] boom"));
        assert_eq!(event.worker, Worker::Poller);
    }
}
