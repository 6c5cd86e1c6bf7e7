//! Dashboard footer: key help and tagline

use super::super::state::DashboardState;
use crate::view_state::ViewStatus;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const TAGLINE: &str = "Gardenice - Monitor your garden in an effective way";

/// Help for the refresh key in the current view.
fn refresh_help(state: &DashboardState) -> &'static str {
    match state.view.status() {
        ViewStatus::Error => "[R] Retry",
        ViewStatus::Ready if state.view.is_refreshing() => "Refreshing...",
        ViewStatus::Ready => "[R] Refresh",
        ViewStatus::Loading => "Loading...",
    }
}

pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let text = format!("[Q] Quit | {} | {}", refresh_help(state), TAGLINE);
    let footer = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
