//! Session setup and initialization

use crate::api::{PlantApi, PlantApiClient};
use crate::config::Settings;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::events::Event;
use crate::view_state::PollUpdate;
use crate::workers::core::EventSender;
use crate::workers::{PollingHandle, start_polling};
use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Fetch and image results from the poller
    pub update_receiver: mpsc::Receiver<PollUpdate>,
    /// Activity events from the poller
    pub event_receiver: mpsc::Receiver<Event>,
    /// Scoped handle to the running poller
    pub polling: PollingHandle,
    pub plant_id: String,
    pub environment: Environment,
    /// When polling started; scheduled fetches are aligned to it
    pub started_at: Instant,
    pub poll_interval: Duration,
}

/// Sets up a polling session against the real API.
///
/// Must be called from within a tokio runtime.
pub fn setup_session(
    settings: Settings,
    poll_interval: Duration,
) -> Result<SessionData, Box<dyn Error>> {
    let client = PlantApiClient::new(settings.environment.clone())?;
    Ok(start_session(Arc::new(client), settings.plant_id, poll_interval))
}

/// Wires channels and starts the poller for `api`.
pub fn start_session(
    api: Arc<dyn PlantApi>,
    plant_id: String,
    poll_interval: Duration,
) -> SessionData {
    let environment = api.environment().clone();
    let (update_sender, update_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);

    let started_at = Instant::now();
    let polling = start_polling(
        api,
        plant_id.clone(),
        poll_interval,
        update_sender,
        EventSender::new(event_sender),
    );

    SessionData {
        update_receiver,
        event_receiver,
        polling,
        plant_id,
        environment,
        started_at,
        poll_interval,
    }
}
