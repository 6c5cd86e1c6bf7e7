//! Dashboard state management
//!
//! Wraps the client view state with everything the terminal needs around it:
//! activity logs, animation tick and poll countdown.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::app::UIConfig;
use crate::view_state::ClientViewState;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Enhanced dashboard state with real-time plant data and animations.
#[derive(Debug)]
pub struct DashboardState {
    /// Plant being monitored.
    pub plant_id: String,
    /// The API the poller talks to.
    pub environment: Environment,
    /// When polling started; scheduled fetches happen at multiples of `poll_interval` after it.
    pub start_time: Instant,
    pub poll_interval: Duration,
    /// Loading / Error / Ready view with the latest plant data.
    pub view: ClientViewState,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        plant_id: String,
        environment: Environment,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            plant_id,
            environment,
            start_time,
            poll_interval: ui_config.poll_interval,
            view: ClientViewState::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    /// Time until the next scheduled fetch.
    pub fn next_poll_in(&self) -> Duration {
        self.next_poll_in_at(Instant::now())
    }

    fn next_poll_in_at(&self, now: Instant) -> Duration {
        let interval_ms = self.poll_interval.as_millis();
        if interval_ms == 0 {
            return Duration::ZERO;
        }
        let elapsed_ms = now.saturating_duration_since(self.start_time).as_millis();
        let remaining_ms = interval_ms - elapsed_ms % interval_ms;
        Duration::from_millis(remaining_ms as u64)
    }

    /// Share of the current interval that has passed, 0..=100.
    pub fn poll_progress_percent(&self) -> u16 {
        let interval = self.poll_interval.as_secs_f64();
        if interval <= 0.0 {
            return 100;
        }
        let elapsed = interval - self.next_poll_in().as_secs_f64();
        ((elapsed / interval) * 100.0).clamp(0.0, 100.0) as u16
    }
}
