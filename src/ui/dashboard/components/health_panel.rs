//! Dashboard health panel component
//!
//! Renders the AI assessment and the sensor readings

use super::super::state::DashboardState;
use super::super::utils::get_health_color;
use crate::consts::cli_consts::display::ASSESSMENT_SUBTITLE;
use crate::plant::display::{evaluation_headline, sensor_hint, sensor_rows};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_health_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let Some(data) = state.view.data() else {
        return;
    };
    let health = data.health();
    let health_color = get_health_color(health);

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", health.icon())),
            Span::styled(
                evaluation_headline(data),
                Style::default()
                    .fg(health_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            ASSESSMENT_SUBTITLE,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "SENSOR READINGS",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let metrics = data.metrics.as_ref();
    for (icon, label, value) in sensor_rows(metrics) {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", icon)),
            Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ]));
    }
    if let Some(hint) = sensor_hint(metrics) {
        lines.push(Line::from(""));
        for text in hint {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let block = Block::default()
        .title("PLANT HEALTH")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(health_color))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
