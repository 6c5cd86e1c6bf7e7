//! Loading and error views
//!
//! Shown in place of the plant panels before the first fetch resolves and
//! after a failed one.

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn status_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::uniform(1))
}

pub fn render_loading(f: &mut Frame, area: Rect, state: &DashboardState) {
    let frame = SPINNER_FRAMES[state.tick % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Loading plant data...", frame),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(status_block("PLANT STATUS", Color::Cyan));
    f.render_widget(paragraph, area);
}

pub fn render_error(f: &mut Frame, area: Rect, state: &DashboardState) {
    let message = state.view.error_message().unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            "⚠️ Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::LightRed),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Retry",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(status_block("PLANT STATUS", Color::Red))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
