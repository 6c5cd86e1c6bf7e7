//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::updaters::DashboardAction;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::view_state::PollUpdate;
use crate::workers::PollingHandle;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub poll_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, poll_interval: Duration) -> Self {
        Self {
            with_background_color,
            poll_interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the plant status.
    Dashboard,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Plant state; updated while the splash screen is still showing.
    dashboard: DashboardState,

    /// Receives fetch and image results from the poller.
    update_receiver: mpsc::Receiver<PollUpdate>,

    /// Receives events from the poller.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Scoped handle to the poller; refresh and image requests go through it.
    polling: PollingHandle,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        plant_id: String,
        environment: Environment,
        start_time: Instant,
        update_receiver: mpsc::Receiver<PollUpdate>,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        polling: PollingHandle,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(plant_id, environment, start_time, ui_config),
            update_receiver,
            event_receiver,
            polling,
        }
    }

    /// Stop polling and wait for the poller to exit.
    pub async fn shutdown(self) {
        self.polling.stop().await;
    }

    /// Apply everything the poller delivered since the last frame.
    fn drain_poller(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_event(event);
        }
        while let Ok(update) = self.update_receiver.try_recv() {
            if let Some(url) = self.dashboard.apply_update(update) {
                self.polling.probe_image(url);
            }
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    loop {
        app.drain_poller();
        app.dashboard.update();

        terminal.draw(|f| render(f, app.current_screen, &app.dashboard))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Let the poller tasks run between frames
        tokio::task::yield_now().await;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        app.current_screen = Screen::Dashboard;
                    }
                    Screen::Dashboard => match app.dashboard.handle_key(key.code) {
                        DashboardAction::Quit => return Ok(()),
                        DashboardAction::Refresh => {
                            if !app.polling.refresh() {
                                log::warn!("Poller is not running; refresh ignored");
                            }
                        }
                        DashboardAction::None => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, dashboard: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, dashboard),
    }
}
