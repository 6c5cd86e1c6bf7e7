//! Activity event delivery from background tasks to the UI

use crate::events::{Event, EventType, Worker};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Cloneable sender that stamps events with their worker and time.
///
/// Delivery is best effort: once the state owner has gone away events are dropped.
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    async fn send(&self, worker: Worker, message: String, event_type: EventType, level: LogLevel) {
        let event = match worker {
            Worker::Poller => Event::poller_with_level(message, event_type, level),
            Worker::ImageProbe => Event::image_probe_with_level(message, event_type, level),
        };
        if self.sender.send(event).await.is_err() {
            log::trace!("Activity event dropped: receiver closed");
        }
    }

    pub async fn send_poller_event(&self, message: String, event_type: EventType, level: LogLevel) {
        self.send(Worker::Poller, message, event_type, level).await;
    }

    pub async fn send_image_event(&self, message: String, event_type: EventType, level: LogLevel) {
        self.send(Worker::ImageProbe, message, event_type, level).await;
    }
}
