//! Dashboard main renderer

use super::components::{footer, header, health_panel, image_panel, logs, status_views};
use super::state::DashboardState;
use crate::view_state::ViewStatus;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 24, 18))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match state.view.status() {
        ViewStatus::Loading => status_views::render_loading(f, main_chunks[1], state),
        ViewStatus::Error => status_views::render_error(f, main_chunks[1], state),
        ViewStatus::Ready => {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(main_chunks[1]);
            image_panel::render_image_panel(f, content_chunks[0], state);
            health_panel::render_health_panel(f, content_chunks[1], state);
        }
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::FetchError;
    use crate::environment::Environment;
    use crate::plant::{Metrics, PlantStatus};
    use crate::ui::app::UIConfig;
    use crate::view_state::PollUpdate;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::{Duration, Instant};

    fn state() -> DashboardState {
        DashboardState::new(
            "plant_001".to_string(),
            Environment::default(),
            Instant::now(),
            UIConfig::new(false, Duration::from_secs(30)),
        )
    }

    fn rendered_text(state: &DashboardState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_loading_view() {
        let state = state();
        let text = rendered_text(&state);
        assert!(text.contains("Loading plant data..."));
        assert!(text.contains("Gardenice Plant Monitor"));
    }

    #[test]
    fn test_renders_error_view_with_retry() {
        let mut state = state();
        state.apply_update(PollUpdate::Started { seq: 1 });
        state.apply_update(PollUpdate::Completed {
            seq: 1,
            result: Err(FetchError::from_status_and_body(
                500,
                r#"{"error":"sensor offline"}"#.to_string(),
            )),
        });
        let text = rendered_text(&state);
        assert!(text.contains("sensor offline"));
        assert!(text.contains("[R] Retry"));
        assert!(!text.contains("Loading plant data..."));
    }

    #[test]
    fn test_renders_ready_view() {
        let mut state = state();
        state.apply_update(PollUpdate::Started { seq: 1 });
        state.apply_update(PollUpdate::Completed {
            seq: 1,
            result: Ok(PlantStatus {
                metrics: Some(Metrics {
                    ai_evaluation: Some("Plant is healthy".to_string()),
                    soil_moisture: Some(42.0),
                    rain: Some(false),
                    light: Some(300.0),
                }),
                image_url: None,
                timestamp: None,
            }),
        });
        let text = rendered_text(&state);
        assert!(text.contains("Plant is healthy"));
        assert!(text.contains("Soil Moisture: 42%"));
        assert!(text.contains("Rain Sensor: Dry"));
        assert!(text.contains("Light Level: 300 lux"));
        assert!(text.contains("No image available"));
        assert!(text.contains("Monitor your garden in an effective way"));
        assert!(!text.contains("Expected metrics"));
    }

    #[test]
    fn test_ready_view_without_readings_lists_expected_metrics() {
        let mut state = state();
        state.apply_update(PollUpdate::Started { seq: 1 });
        state.apply_update(PollUpdate::Completed {
            seq: 1,
            result: Ok(PlantStatus {
                metrics: Some(Metrics {
                    ai_evaluation: Some("Unhealthy - wilting".to_string()),
                    ..Default::default()
                }),
                image_url: None,
                timestamp: None,
            }),
        });
        let text = rendered_text(&state);
        assert!(text.contains("Soil Moisture: not available"));
        assert!(text.contains("Expected metrics: Soil Moisture, Rain Sensor, Light Level"));
    }
}
