//! Dashboard header: title, plant details and the countdown to the next poll

use super::super::state::DashboardState;
use crate::environment::Environment;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Ticks per loop of the indeterminate fetch animation.
const FETCH_ANIMATION_TICKS: usize = 20;

fn details_line(state: &DashboardState) -> Line<'static> {
    let env_color = match state.environment {
        Environment::Production => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    let last_updated = match state.view.last_updated_at() {
        Some(at) => format!("Last updated: {}", at.format("%H:%M:%S")),
        None => "Last updated: never".to_string(),
    };
    let separator = || Span::styled(" | ", Style::default().fg(Color::DarkGray));

    Line::from(vec![
        Span::styled("Real-time monitoring system", Style::default().fg(Color::Gray)),
        separator(),
        Span::styled(
            format!("Plant: {}", state.plant_id),
            Style::default().fg(Color::LightBlue),
        ),
        separator(),
        Span::styled(
            format!("Env: {}", state.environment),
            Style::default().fg(env_color),
        ),
        separator(),
        Span::styled(last_updated, Style::default().fg(Color::DarkGray)),
    ])
}

/// Animated while a request is outstanding, otherwise counts down to the next tick.
fn poll_gauge(state: &DashboardState) -> Gauge<'static> {
    let (label, color, percent) = if state.view.is_refreshing() {
        let phase = state.tick % FETCH_ANIMATION_TICKS;
        (
            "FETCHING - Requesting plant data".to_string(),
            Color::LightGreen,
            (phase * 100 / FETCH_ANIMATION_TICKS) as u16,
        )
    } else {
        (
            format!("NEXT UPDATE in {}s", state.next_poll_in().as_secs()),
            Color::LightBlue,
            state.poll_progress_percent(),
        )
    };

    Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .percent(percent)
        .label(label)
}

pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let [title_area, gauge_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(2)]).areas(area);

    let title = Paragraph::new(vec![
        Line::styled(
            "🌱 Gardenice Plant Monitor",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        details_line(state),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );

    f.render_widget(title, title_area);
    f.render_widget(poll_gauge(state), gauge_area);
}
