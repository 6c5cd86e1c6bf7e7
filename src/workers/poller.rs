//! Plant status polling
//!
//! A single task owns the interval timer and every in-flight request. It fetches
//! immediately, then on every tick of a fixed interval; ticks do not wait for
//! earlier requests, so requests may overlap. Every request gets a monotonic
//! sequence number that travels with its result (see [`crate::view_state`]).
//!
//! The task lives exactly as long as its [`PollingHandle`]: stopping or dropping
//! the handle cancels the timer and aborts outstanding requests.

use super::core::EventSender;
use crate::api::PlantApi;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::network::ErrorHandler;
use crate::plant::display::evaluation_headline;
use crate::view_state::PollUpdate;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Requests sent from the state owner to the poller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollCommand {
    /// Fetch now, in addition to the scheduled ticks.
    Refresh,
    /// Load the captured image at the given URL.
    ProbeImage(String),
}

/// Why a fetch was started
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum FetchTrigger {
    Scheduled,
    Manual,
}

/// Scoped handle to a running poller.
pub struct PollingHandle {
    commands: mpsc::Sender<PollCommand>,
    cancel: CancellationToken,
    join: Option<JoinHandle<()>>,
}

impl PollingHandle {
    /// Ask for an immediate fetch. Returns `false` once the poller has stopped.
    pub fn refresh(&self) -> bool {
        self.send(PollCommand::Refresh)
    }

    /// Ask for the captured image to be loaded.
    pub fn probe_image(&self, url: String) -> bool {
        self.send(PollCommand::ProbeImage(url))
    }

    fn send(&self, command: PollCommand) -> bool {
        !self.cancel.is_cancelled() && self.commands.try_send(command).is_ok()
    }

    /// Cancel the timer and all in-flight requests, and wait for the task to exit.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(join) = self.join.take() {
            let _ = join.await;
        }
    }
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Start polling `plant_id` every `interval`, delivering results on `updates`.
///
/// Must be called from within a tokio runtime.
pub fn start_polling(
    api: Arc<dyn PlantApi>,
    plant_id: String,
    interval: Duration,
    updates: mpsc::Sender<PollUpdate>,
    event_sender: EventSender,
) -> PollingHandle {
    let (command_sender, command_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let cancel = CancellationToken::new();

    let poller = Poller {
        api,
        plant_id,
        updates,
        event_sender,
        cancel: cancel.clone(),
        error_handler: ErrorHandler::new(),
        next_seq: 0,
        in_flight: JoinSet::new(),
    };
    let join = tokio::spawn(poller.run(interval, command_receiver));

    PollingHandle {
        commands: command_sender,
        cancel,
        join: Some(join),
    }
}

struct Poller {
    api: Arc<dyn PlantApi>,
    plant_id: String,
    updates: mpsc::Sender<PollUpdate>,
    event_sender: EventSender,
    cancel: CancellationToken,
    error_handler: ErrorHandler,
    next_seq: u64,
    in_flight: JoinSet<()>,
}

impl Poller {
    async fn run(mut self, interval: Duration, mut commands: mpsc::Receiver<PollCommand>) {
        // The first tick completes immediately
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = ticker.tick() => {
                    if !self.start_fetch(FetchTrigger::Scheduled).await {
                        break;
                    }
                }
                Some(command) = commands.recv() => {
                    let keep_running = match command {
                        PollCommand::Refresh => self.start_fetch(FetchTrigger::Manual).await,
                        PollCommand::ProbeImage(url) => {
                            self.start_probe(url);
                            true
                        }
                    };
                    if !keep_running {
                        break;
                    }
                }
                // Reap finished requests
                Some(_) = self.in_flight.join_next(), if !self.in_flight.is_empty() => {}
            }
        }

        self.in_flight.abort_all();
        log::debug!("Poller for {} stopped", self.plant_id);
    }

    /// Returns `false` when the state owner is gone and polling should end.
    async fn start_fetch(&mut self, trigger: FetchTrigger) -> bool {
        self.next_seq += 1;
        let seq = self.next_seq;
        // A full channel must not hold off cancellation
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return false,
            sent = self.updates.send(PollUpdate::Started { seq }) => {
                if sent.is_err() {
                    return false;
                }
            }
        }

        let message = match trigger {
            FetchTrigger::Scheduled => format!("Fetching plant data for {}...", self.plant_id),
            FetchTrigger::Manual => format!("Refreshing plant data for {}...", self.plant_id),
        };
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return false,
            _ = self.event_sender.send_poller_event(message, EventType::Refresh, LogLevel::Info) => {}
        }

        let api = Arc::clone(&self.api);
        let plant_id = self.plant_id.clone();
        let updates = self.updates.clone();
        let event_sender = self.event_sender.clone();
        let cancel = self.cancel.clone();
        let error_handler = self.error_handler.clone();

        self.in_flight.spawn(async move {
            let result = api.fetch_plant_status(&plant_id).await;
            if cancel.is_cancelled() {
                return;
            }
            match &result {
                Ok(status) => {
                    event_sender
                        .send_poller_event(
                            format!("Plant data updated: {}", evaluation_headline(status)),
                            EventType::Success,
                            LogLevel::Info,
                        )
                        .await;
                }
                Err(e) => {
                    log::warn!("Request #{} for {} failed: {}", seq, plant_id, e);
                    event_sender
                        .send_poller_event(
                            format!("Failed to fetch plant data: {}", e),
                            EventType::Error,
                            error_handler.classify_error(e),
                        )
                        .await;
                }
            }
            let _ = updates.send(PollUpdate::Completed { seq, result }).await;
        });
        true
    }

    fn start_probe(&mut self, url: String) {
        let api = Arc::clone(&self.api);
        let updates = self.updates.clone();
        let event_sender = self.event_sender.clone();
        let cancel = self.cancel.clone();
        let error_handler = self.error_handler.clone();

        self.in_flight.spawn(async move {
            let result = api.probe_image(&url).await;
            if cancel.is_cancelled() {
                return;
            }
            match &result {
                Ok(()) => {
                    event_sender
                        .send_image_event(
                            "Captured image loaded".to_string(),
                            EventType::Success,
                            LogLevel::Debug,
                        )
                        .await;
                }
                Err(e) => {
                    event_sender
                        .send_image_event(
                            format!("Image not available, showing placeholder: {}", e),
                            EventType::Error,
                            error_handler.classify_image_error(e),
                        )
                        .await;
                }
            }
            let _ = updates.send(PollUpdate::ImageProbed { url, result }).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPlantApi;
    use crate::api::error::{FetchError, ImageLoadError};
    use crate::environment::Environment;
    use crate::plant::{Metrics, PlantStatus};
    use crate::view_state::{ApplyOutcome, ClientViewState, ViewStatus};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    const INTERVAL: Duration = Duration::from_secs(30);

    fn status_with(evaluation: &str) -> PlantStatus {
        PlantStatus {
            metrics: Some(Metrics {
                ai_evaluation: Some(evaluation.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn channels() -> (
        mpsc::Sender<PollUpdate>,
        mpsc::Receiver<PollUpdate>,
        EventSender,
        mpsc::Receiver<crate::events::Event>,
    ) {
        let (update_sender, update_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        (
            update_sender,
            update_receiver,
            EventSender::new(event_sender),
            event_receiver,
        )
    }

    fn drain(receiver: &mut mpsc::Receiver<PollUpdate>) -> Vec<PollUpdate> {
        let mut updates = Vec::new();
        while let Ok(update) = receiver.try_recv() {
            updates.push(update);
        }
        updates
    }

    fn completed(updates: &[PollUpdate]) -> usize {
        updates
            .iter()
            .filter(|u| matches!(u, PollUpdate::Completed { .. }))
            .count()
    }

    /// Answers the first request slowly and every later one immediately.
    struct SlowFirstApi {
        calls: AtomicUsize,
        first_delay: Duration,
        environment: Environment,
    }

    #[async_trait::async_trait]
    impl PlantApi for SlowFirstApi {
        fn environment(&self) -> &Environment {
            &self.environment
        }

        async fn fetch_plant_status(&self, _plant_id: &str) -> Result<PlantStatus, FetchError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                sleep(self.first_delay).await;
                return Ok(status_with("Plant is unhealthy"));
            }
            Ok(status_with("Plant is healthy"))
        }

        async fn probe_image(&self, _url: &str) -> Result<(), ImageLoadError> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_immediately_then_every_interval() {
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status()
            .withf(|plant_id| plant_id == "plant_001")
            .returning(|_| Ok(status_with("Plant is healthy")));
        let (updates, mut update_receiver, events, _event_receiver) = channels();

        let handle = start_polling(
            Arc::new(mock),
            "plant_001".to_string(),
            INTERVAL,
            updates,
            events,
        );

        sleep(Duration::from_secs(1)).await;
        assert_eq!(completed(&drain(&mut update_receiver)), 1);

        sleep(INTERVAL * 2).await;
        assert_eq!(completed(&drain(&mut update_receiver)), 2);

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequence_numbers_are_monotonic() {
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status()
            .returning(|_| Ok(PlantStatus::default()));
        let (updates, mut update_receiver, events, _event_receiver) = channels();

        let handle = start_polling(Arc::new(mock), "p".to_string(), INTERVAL, updates, events);
        sleep(INTERVAL * 3 + Duration::from_secs(1)).await;
        handle.stop().await;

        let started: Vec<u64> = drain(&mut update_receiver)
            .iter()
            .filter_map(|u| match u {
                PollUpdate::Started { seq } => Some(*seq),
                _ => None,
            })
            .collect();
        assert_eq!(started, vec![1, 2, 3, 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_fetches_immediately() {
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status()
            .returning(|_| Ok(PlantStatus::default()));
        let (updates, mut update_receiver, events, _event_receiver) = channels();

        let handle = start_polling(Arc::new(mock), "p".to_string(), INTERVAL, updates, events);
        sleep(Duration::from_secs(1)).await;
        drain(&mut update_receiver);

        assert!(handle.refresh());
        sleep(Duration::from_secs(1)).await;
        assert_eq!(completed(&drain(&mut update_receiver)), 1);

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_error_reaches_error_view_and_retry_recovers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status().returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(FetchError::from_status_and_body(
                    500,
                    r#"{"error":"sensor offline"}"#.to_string(),
                ))
            } else {
                Ok(status_with("Plant is healthy"))
            }
        });
        let (updates, mut update_receiver, events, _event_receiver) = channels();
        let mut state = ClientViewState::new();

        let handle = start_polling(Arc::new(mock), "p".to_string(), INTERVAL, updates, events);
        sleep(Duration::from_secs(1)).await;
        for update in drain(&mut update_receiver) {
            state.apply(update);
        }
        assert_eq!(state.status(), ViewStatus::Error);
        assert_eq!(state.error_message(), Some("sensor offline"));
        assert!(state.can_refresh());

        assert!(handle.refresh());
        sleep(Duration::from_secs(1)).await;
        for update in drain(&mut update_receiver) {
            state.apply(update);
        }
        assert_eq!(state.status(), ViewStatus::Ready);

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_requests_last_sent_wins() {
        let api = SlowFirstApi {
            calls: AtomicUsize::new(0),
            first_delay: Duration::from_secs(45),
            environment: Environment::default(),
        };
        let (updates, mut update_receiver, events, _event_receiver) = channels();
        let mut state = ClientViewState::new();

        let handle = start_polling(Arc::new(api), "p".to_string(), INTERVAL, updates, events);
        // Request #2 fires at 30s while #1 is still pending until 45s
        sleep(Duration::from_secs(50)).await;

        let outcomes: Vec<ApplyOutcome> = drain(&mut update_receiver)
            .into_iter()
            .map(|update| state.apply(update))
            .collect();

        assert!(outcomes.contains(&ApplyOutcome::Discarded));
        assert_eq!(
            state.data().and_then(|d| d.ai_evaluation()),
            Some("Plant is healthy")
        );

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_timer_and_in_flight_requests() {
        let api = SlowFirstApi {
            calls: AtomicUsize::new(0),
            first_delay: Duration::from_secs(20),
            environment: Environment::default(),
        };
        let (updates, mut update_receiver, events, _event_receiver) = channels();

        let handle = start_polling(Arc::new(api), "p".to_string(), INTERVAL, updates, events);
        sleep(Duration::from_secs(1)).await;
        handle.stop().await;
        sleep(INTERVAL * 4).await;

        let updates = drain(&mut update_receiver);
        assert_eq!(updates.len(), 1);
        assert!(matches!(updates[0], PollUpdate::Started { seq: 1 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_returns_while_update_channel_is_full() {
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status()
            .returning(|_| Ok(PlantStatus::default()));
        let (updates, _update_receiver) = mpsc::channel(1);
        let (events, _event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);

        let handle = start_polling(
            Arc::new(mock),
            "p".to_string(),
            INTERVAL,
            updates,
            EventSender::new(events),
        );
        // Nobody drains the updates, so the next scheduled fetch blocks on send
        sleep(INTERVAL * 3 + Duration::from_secs(5)).await;

        let stopped = tokio::time::timeout(Duration::from_secs(60), handle.stop()).await;
        assert!(stopped.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_returns_while_event_channel_is_full() {
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status()
            .returning(|_| Ok(PlantStatus::default()));
        let (updates, mut update_receiver, _, _) = channels();
        let (events, _event_receiver) = mpsc::channel(1);

        let handle = start_polling(
            Arc::new(mock),
            "p".to_string(),
            INTERVAL,
            updates,
            EventSender::new(events),
        );
        sleep(INTERVAL * 3 + Duration::from_secs(5)).await;
        drain(&mut update_receiver);

        let stopped = tokio::time::timeout(Duration::from_secs(60), handle.stop()).await;
        assert!(stopped.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_polling() {
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status()
            .returning(|_| Ok(PlantStatus::default()));
        let (updates, mut update_receiver, events, _event_receiver) = channels();

        let handle = start_polling(Arc::new(mock), "p".to_string(), INTERVAL, updates, events);
        sleep(Duration::from_secs(1)).await;
        drop(handle);
        drain(&mut update_receiver);

        sleep(INTERVAL * 3).await;
        assert!(drain(&mut update_receiver).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_image_reports_failure() {
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status()
            .returning(|_| Ok(PlantStatus::default()));
        mock.expect_probe_image()
            .withf(|url| url == "https://x/a.jpg")
            .returning(|_| Err(ImageLoadError::Status(404)));
        let (updates, mut update_receiver, events, _event_receiver) = channels();

        let handle = start_polling(Arc::new(mock), "p".to_string(), INTERVAL, updates, events);
        assert!(handle.probe_image("https://x/a.jpg".to_string()));
        sleep(Duration::from_secs(1)).await;
        handle.stop().await;

        let probed = drain(&mut update_receiver).into_iter().find_map(|u| match u {
            PollUpdate::ImageProbed { url, result } => Some((url, result)),
            _ => None,
        });
        let (url, result) = probed.expect("image probe result");
        assert_eq!(url, "https://x/a.jpg");
        assert!(matches!(result, Err(ImageLoadError::Status(404))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_emits_classified_event() {
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status()
            .returning(|_| Err(FetchError::from_status_and_body(503, String::new())));
        let (updates, _update_receiver, events, mut event_receiver) = channels();

        let handle = start_polling(Arc::new(mock), "p".to_string(), INTERVAL, updates, events);
        sleep(Duration::from_secs(1)).await;
        handle.stop().await;

        let mut error_event = None;
        while let Ok(event) = event_receiver.try_recv() {
            if event.event_type == EventType::Error {
                error_event = Some(event);
            }
        }
        let event = error_event.expect("error event");
        assert_eq!(event.log_level, LogLevel::Warn);
        assert!(event.msg.contains("503"));
    }
}
