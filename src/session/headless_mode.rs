//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::view_state::{ApplyOutcome, ClientViewState, PollUpdate};
use std::error::Error;

/// Runs the application in headless mode
///
/// Prints every displayable activity event and a report of the view after
/// each applied result, until Ctrl+C.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.plant_id, &session.environment);

    let mut state = ClientViewState::new();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
            }
            Some(update) = session.update_receiver.recv() => {
                let (lines, probe) = apply_update(&mut state, update, &session.plant_id);
                if let Some(url) = probe {
                    session.polling.probe_image(url);
                }
                for line in lines {
                    println!("{}", line);
                }
            }
            else => break,
        }
    }

    print_session_shutdown();
    session.polling.stop().await;
    print_session_exit_success();

    Ok(())
}

/// Apply one update; returns the lines to print and an image URL to probe.
fn apply_update(
    state: &mut ClientViewState,
    update: PollUpdate,
    plant_id: &str,
) -> (Vec<String>, Option<String>) {
    let is_fetch_result = matches!(update, PollUpdate::Completed { .. });
    let is_image_result = matches!(update, PollUpdate::ImageProbed { .. });

    match state.apply(update) {
        ApplyOutcome::Discarded => {
            log::debug!("Discarded a superseded result for {}", plant_id);
            (Vec::new(), None)
        }
        ApplyOutcome::Applied { probe_image } => {
            let lines = if is_fetch_result {
                state.report_lines(plant_id)
            } else if is_image_result {
                vec![state.image().describe()]
            } else {
                Vec::new()
            };
            (lines, probe_image)
        }
    }
}
