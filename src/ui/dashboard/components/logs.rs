//! Dashboard activity log panel

use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, format_compact_timestamp, get_worker_color};
use crate::events::{Event as WorkerEvent, EventType};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn status_icon(event: &WorkerEvent) -> &'static str {
    match (event.event_type, event.log_level) {
        (EventType::Success, _) => "✅",
        (EventType::Error, LogLevel::Warn) => "⚠️",
        (EventType::Error, _) => "❌",
        (EventType::Refresh, _) => "🔄",
    }
}

fn event_line(event: &WorkerEvent) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{} ", status_icon(event))),
        Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            clean_http_error_message(&event.msg),
            Style::default().fg(get_worker_color(&event.worker)),
        ),
    ])
}

/// Render the most recent displayable events, newest first, as many as fit.
pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Two border rows plus the title
    let visible = usize::from(area.height.saturating_sub(3)).max(1);

    let mut lines: Vec<Line> = state
        .activity_logs
        .iter()
        .rev()
        .filter(|event| event.should_display())
        .take(visible)
        .map(event_line)
        .collect();
    if lines.is_empty() {
        lines.push(Line::from("Waiting for the first poll..."));
    }

    let block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
