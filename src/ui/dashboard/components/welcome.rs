//! Dashboard welcome panel component
//!
//! Renders the avatar initials, the student's name, and their section

use super::super::state::DashboardState;
use super::super::utils::initials;

use ratatui::Frame;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_welcome(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let palette = state.theme.palette();
    let avatar = initials(&state.profile.name);

    let mut name_line = vec![];
    if !avatar.is_empty() {
        name_line.push(Span::styled(
            format!("({}) ", avatar),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ));
    }
    name_line.push(Span::styled(
        state.profile.name.clone(),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ));

    let lines = vec![
        Line::from(Span::styled(
            "Welcome back,",
            Style::default().fg(palette.muted),
        )),
        Line::from(name_line),
        Line::from(Span::styled(
            format!("Section: {}", state.profile.section),
            Style::default().fg(palette.muted),
        )),
    ];

    let block = Block::default()
        .title("WELCOME")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
