//! Bottom tab bar component
//!
//! Active highlighting is recomputed from the router path on every frame;
//! no active flag is stored anywhere.

use super::super::utils::icon_glyph;
use crate::ui::navigation::{BOTTOM_TABS, is_active};
use crate::ui::theme::Palette;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_tabs(f: &mut Frame, area: Rect, current_path: &str, palette: &Palette) {
    let bar = Block::default()
        .borders(Borders::TOP)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(palette.muted));
    let inner = bar.inner(area);
    f.render_widget(bar, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (index, tab) in BOTTOM_TABS.iter().enumerate() {
        let active = is_active(tab, current_path);
        let style = if active {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };

        let mut lines = vec![Line::from(Span::styled(
            format!("{} [{}] {}", icon_glyph(tab.icon), index + 1, tab.label),
            style,
        ))];
        if active {
            lines.push(Line::from(Span::styled(
                "▔▔▔▔▔▔",
                Style::default().fg(palette.primary),
            )));
        }

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(paragraph, cells[index]);
    }
}
