//! Dashboard image panel component
//!
//! The terminal cannot draw the captured photo, so this panel shows whether it
//! could be loaded, its URL and the capture time.

use super::super::state::DashboardState;
use crate::consts::cli_consts::display::{NO_IMAGE, PLACEHOLDER_ALT, PLACEHOLDER_IMAGE};
use crate::plant::display::captured_text;
use crate::view_state::ImageState;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_image_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = match state.view.image() {
        ImageState::Missing => vec![Line::from(Span::styled(
            format!("📷 {}", NO_IMAGE),
            Style::default().fg(Color::DarkGray),
        ))],
        ImageState::Loading { url } => vec![
            Line::from(Span::styled(
                "⏳ Loading image...",
                Style::default().fg(Color::LightBlue),
            )),
            Line::from(Span::styled(url.clone(), Style::default().fg(Color::DarkGray))),
        ],
        ImageState::Loaded { url } => vec![
            Line::from(Span::styled(
                "🖼️ Latest plant image",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(url.clone(), Style::default().fg(Color::Cyan))),
        ],
        ImageState::Placeholder { .. } => vec![
            Line::from(Span::styled(
                format!("🖼️ {}", PLACEHOLDER_IMAGE),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                PLACEHOLDER_ALT,
                Style::default().fg(Color::Yellow),
            )),
        ],
    };

    let timestamp = state.view.data().and_then(|d| d.timestamp.as_ref());
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        captured_text(timestamp),
        Style::default().fg(Color::Gray),
    )));

    let block = Block::default()
        .title("CAPTURED IMAGE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
