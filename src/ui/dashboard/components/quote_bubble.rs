//! Mascot quote bubble overlay
//!
//! A small speech bubble anchored to the bottom-right corner, above the
//! tab bar, with the portal's priest mascot peeking in beside it.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

const BUBBLE_WIDTH: u16 = 44;
const BUBBLE_HEIGHT: u16 = 9;

/// Mascot frames alternated on the animation tick so the figure appears
/// to wave.
const MASCOT_FRAMES: [[&str; 3]; 2] = [
    ["  o  ", " /†\\ ", " / \\ "],
    ["  o/ ", " /†  ", " / \\ "],
];

pub fn render_quote_bubble(f: &mut Frame, state: &DashboardState) {
    let palette = state.theme.palette();
    let quote = state.notice.current();
    let area = f.area();

    let width = BUBBLE_WIDTH.min(area.width);
    let height = BUBBLE_HEIGHT.min(area.height);
    let bubble = Rect {
        x: area.width.saturating_sub(width),
        y: area.height.saturating_sub(height + 7),
        width,
        height,
    };
    f.render_widget(Clear, bubble);

    let mascot = MASCOT_FRAMES[(state.tick / 4) % MASCOT_FRAMES.len()];
    let lines = vec![
        Line::from(Span::styled(
            format!("\"{}\"", quote.text),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("— {}", quote.author),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(mascot[0], Style::default().fg(palette.accent)),
            Span::raw("  "),
            Span::styled("[M] another", Style::default().fg(palette.primary)),
        ]),
        Line::from(vec![
            Span::styled(mascot[1], Style::default().fg(palette.accent)),
            Span::raw("  "),
            Span::styled("[X] close", Style::default().fg(palette.muted)),
        ]),
        Line::from(Span::styled(mascot[2], Style::default().fg(palette.accent))),
    ];

    let block = Block::default()
        .title(" ✝ DAILY INSPIRATION ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.panel))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, bubble);
}
