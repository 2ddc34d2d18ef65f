//! Dashboard header component
//!
//! Renders the portal title and the theme/tutorial/sign-out controls

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Frames cycled by the toggle icon while a theme transition is open.
const SPIN_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the header with title and the control row.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let palette = state.theme.palette();

    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section
    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("CATHOLINK STUDENT PORTAL v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Control row: the toggle icon spins while the transition window is
    // open, mirroring the web portal's animated icon.
    let theme_icon = if state.theme.is_dark() { "☀" } else { "☾" };
    let theme_span = if state.theme.is_transitioning() {
        Span::styled(
            format!("[T] {} {}", theme_icon, SPIN_FRAMES[state.tick % SPIN_FRAMES.len()]),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("[T] {} Theme", theme_icon),
            Style::default().fg(palette.text),
        )
    };

    let controls = Line::from(vec![
        theme_span,
        Span::styled("   [?] Tutorial", Style::default().fg(palette.text)),
        Span::styled("   [O] Sign Out", Style::default().fg(palette.text)),
    ]);

    let control_row = Paragraph::new(controls)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.muted)),
        );
    f.render_widget(control_row, header_chunks[1]);
}
