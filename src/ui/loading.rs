//! Loading screen rendering module.
//!
//! Shown while the profile loader has not delivered a profile yet. No
//! dashboard work happens behind this screen.

use crate::ui::theme::{Palette, ambient_dark};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const LOGO_CROSS: &str = r#"
     ██
     ██
  ████████
     ██
     ██
     ██
"#;

pub fn render_loading(f: &mut Frame, status: &str) {
    let palette = Palette::for_mode(ambient_dark());
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        f.area(),
    );

    // Convert LOGO_CROSS into styled Lines
    let mut lines: Vec<Line> = LOGO_CROSS
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Span::styled(
                line.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    // Add a spacer line
    lines.push(Line::from(Span::raw(" ")));

    lines.push(
        Span::styled(
            "CathoLink Student Portal",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )
        .into(),
    );

    lines.push(
        Span::styled(
            format!("Version {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );

    lines.push(Line::from(Span::raw(" ")));
    lines.push(Span::styled(status.to_string(), Style::default().fg(palette.muted)).into());

    // Determine the logo height
    let logo_height = (lines.len() + 2) as u16;

    // Vertically center using layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min((f.area().height.saturating_sub(logo_height)) / 2),
            Constraint::Length(logo_height),
            Constraint::Min((f.area().height.saturating_sub(logo_height + 1)) / 2),
        ])
        .split(f.area());

    let centered_area: Rect = vertical_chunks[1];

    // Create the centered paragraph
    let logo = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(logo, centered_area);
}
