//! Start and stop notices for TUI and headless sessions

use crate::environment::Environment;

/// Notice printed around a session, outside the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    Info(String),
    Success(String),
}

impl std::fmt::Display for SessionMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Bold cyan for info, bold green for success
        match self {
            Self::Info(msg) => write!(f, "\x1b[1;36m[INFO]\x1b[0m {}", msg),
            Self::Success(msg) => write!(f, "\x1b[1;32m[SUCCESS]\x1b[0m {}", msg),
        }
    }
}

pub fn print_session_starting(mode: &str, plant_id: &str, environment: &Environment) {
    let message = SessionMessage::Info(format!(
        "Starting {} mode for plant {} ({})",
        mode, plant_id, environment
    ));
    println!("{}", message);
}

pub fn print_session_shutdown() {
    println!("{}", SessionMessage::Info("Stopping poller...".to_string()));
}

pub fn print_session_exit_success() {
    println!(
        "{}",
        SessionMessage::Success("Gardenice monitor exited successfully".to_string())
    );
}
