//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from poller output and keys

use super::state::DashboardState;
use crate::view_state::{ApplyOutcome, PollUpdate};
use crossterm::event::KeyCode;

/// What the UI loop should do after a key press on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Quit,
    /// Ask the poller for an immediate fetch.
    Refresh,
}

impl DashboardState {
    /// Advance the animation and move queued events into the activity log.
    pub fn update(&mut self) {
        self.tick += 1;
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Apply one poller update. Returns an image URL the poller should load.
    pub fn apply_update(&mut self, update: PollUpdate) -> Option<String> {
        match self.view.apply(update) {
            ApplyOutcome::Applied { probe_image } => probe_image,
            ApplyOutcome::Discarded => {
                log::debug!("Discarded a superseded result for {}", self.plant_id);
                None
            }
        }
    }

    /// Map a key press to an action. Retry/refresh is ignored while it is unavailable.
    pub fn handle_key(&self, code: KeyCode) -> DashboardAction {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => DashboardAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') if self.view.can_refresh() => {
                DashboardAction::Refresh
            }
            _ => DashboardAction::None,
        }
    }
}
