//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::error::Error;
use std::io::{self, Stdout};

/// Raw-mode alternate screen, restored when dropped so that an early return or
/// a UI error never leaves the user's terminal unusable.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the dashboard until the user quits, then stops the poller.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `with_background` - Whether to enable background colors
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.plant_id, &session.environment);

    let mut app = ui::App::new(
        session.plant_id,
        session.environment,
        session.started_at,
        session.update_receiver,
        session.event_receiver,
        session.polling,
        UIConfig::new(with_background, session.poll_interval),
    );

    let result = match TerminalGuard::enter() {
        Ok(mut guard) => ui::run(&mut guard.terminal, &mut app).await,
        Err(e) => Err(e),
    };

    print_session_shutdown();
    app.shutdown().await;
    result?;
    print_session_exit_success();

    Ok(())
}
