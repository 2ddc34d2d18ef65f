//! Dashboard quick-action grid component
//!
//! Renders the 2x2 grid of navigation shortcuts

use super::super::state::DashboardState;
use super::super::utils::icon_glyph;
use crate::ui::navigation::QUICK_ACTIONS;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Key hints shown on the grid cells, in display order.
pub const ACTION_KEYS: [char; 4] = ['5', '6', '7', '8'];

pub fn render_actions(f: &mut Frame, area: Rect, state: &DashboardState) {
    let palette = state.theme.palette();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row_index, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);

        for (col_index, cell) in cells.iter().enumerate() {
            let index = row_index * 2 + col_index;
            let action = &QUICK_ACTIONS[index];

            let lines = vec![
                Line::from(Span::styled(
                    format!("{} {}", icon_glyph(action.icon), action.label),
                    Style::default()
                        .fg(action.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    action.description.unwrap_or_default(),
                    Style::default().fg(palette.muted),
                )),
            ];

            let block = Block::default()
                .title(format!("[{}]", ACTION_KEYS[index]))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.muted));

            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, *cell);
        }
    }
}
