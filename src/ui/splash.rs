//! Splash screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
   ██████╗   █████╗  ██████╗  ██████╗  ███████╗ ███╗   ██╗ ██╗  ██████╗ ███████╗
  ██╔════╝  ██╔══██╗ ██╔══██╗ ██╔══██╗ ██╔════╝ ████╗  ██║ ██║ ██╔════╝ ██╔════╝
  ██║  ███╗ ███████║ ██████╔╝ ██║  ██║ █████╗   ██╔██╗ ██║ ██║ ██║      █████╗
  ██║   ██║ ██╔══██║ ██╔══██╗ ██║  ██║ ██╔══╝   ██║╚██╗██║ ██║ ██║      ██╔══╝
  ╚██████╔╝ ██║  ██║ ██║  ██║ ██████╔╝ ███████╗ ██║ ╚████║ ██║ ╚██████╗ ███████╗
   ╚═════╝  ╚═╝  ╚═╝ ╚═╝  ╚═╝ ╚═════╝  ╚══════╝ ╚═╝  ╚═══╝ ╚═╝  ╚═════╝ ╚══════╝
"#;

/// Logo, product name and version, centered on screen.
pub fn render_splash(f: &mut Frame) {
    let logo_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|row| Line::styled(row, logo_style))
        .collect();
    lines.extend([
        Line::raw(""),
        Line::styled(
            "Plant Monitor",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Version {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(f.area());

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}
