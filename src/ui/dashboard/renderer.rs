//! Dashboard main renderer

use super::components::{actions, footer, header, quote_bubble, tabs, welcome};
use super::state::DashboardState;
use crate::ui::tutorial::render_tutorial;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::Style;
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState, current_path: &str) {
    let palette = state.theme.palette();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        f.area(),
    );

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    welcome::render_welcome(f, main_chunks[1], state);
    actions::render_actions(f, main_chunks[2], state);
    tabs::render_tabs(f, main_chunks[3], current_path, &palette);
    footer::render_footer(f, main_chunks[4], &palette);

    // Overlays render last so they sit above the shell.
    if state.notice.is_visible() {
        quote_bubble::render_quote_bubble(f, state);
    }
    render_tutorial(f, &state.tutorial, &palette);
}
