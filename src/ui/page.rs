//! Placeholder pages for navigated-to routes
//!
//! The dashboard is the only screen this client implements fully; other
//! portal routes render a titled placeholder so tab navigation and active
//! highlighting stay exercised.

use crate::router::routes;
use crate::ui::dashboard::components::tabs::render_tabs;
use crate::ui::navigation::{BOTTOM_TABS, QUICK_ACTIONS};
use crate::ui::theme::{Palette, ambient_dark};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Human-readable title for a route path.
fn page_title(path: &str) -> &'static str {
    if path == routes::AUTH {
        return "Signed Out";
    }
    BOTTOM_TABS
        .iter()
        .chain(QUICK_ACTIONS.iter())
        .find(|d| d.path == path)
        .map(|d| d.label)
        .unwrap_or("Not Found")
}

pub fn render_page(f: &mut Frame, current_path: &str) {
    let palette = Palette::for_mode(ambient_dark());
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(4)])
        .margin(1)
        .split(f.area());

    let body = if current_path == routes::AUTH {
        "You have been signed out. Press [Q] to quit, or sign in again from the web portal."
    } else {
        "This page lives in the web portal. Press [1] to return to the dashboard."
    };

    let lines = vec![
        Line::from(Span::styled(
            page_title(current_path),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(body, Style::default().fg(palette.muted))),
    ];

    let block = Block::default()
        .title(current_path.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.muted))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, chunks[0]);

    render_tabs(f, chunks[1], current_path, &palette);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_titles_resolve_from_descriptors() {
        assert_eq!(page_title(routes::ATTENDANCE), "Attendance");
        assert_eq!(page_title(routes::RATINGS), "Rate App");
        assert_eq!(page_title(routes::AUTH), "Signed Out");
        assert_eq!(page_title("/nope"), "Not Found");
    }
}
