//! Dashboard footer component
//!
//! Renders footer with key hints and the portal tagline

use crate::ui::theme::Palette;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::Paragraph;

/// Render the footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, palette: &Palette) {
    let footer_text =
        "[Q] Quit | [1-4] Tabs | [5-8] Actions | CathoLink — Faith. Attendance. Connection.";

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(footer, area);
}
