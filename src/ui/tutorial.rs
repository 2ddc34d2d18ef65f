//! Tutorial overlay
//!
//! The shell only owns the visibility lifecycle; step content is static.

use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

pub struct TutorialStep {
    pub title: &'static str,
    pub body: &'static str,
}

pub const TUTORIAL_STEPS: [TutorialStep; 5] = [
    TutorialStep {
        title: "Welcome to CathoLink",
        body: "This is your student portal dashboard. Your name and section appear in the welcome panel at the top.",
    },
    TutorialStep {
        title: "Quick Actions",
        body: "The grid in the middle jumps straight to the most common tasks. Press the number shown on a card to open it.",
    },
    TutorialStep {
        title: "Attendance QR",
        body: "Open QR Code before class starts and present it to your teacher to be marked present.",
    },
    TutorialStep {
        title: "Daily Inspiration",
        body: "A quote bubble peeks in shortly after the dashboard opens. Tap the mascot for another quote, or close it.",
    },
    TutorialStep {
        title: "Theme & Sign Out",
        body: "Toggle between light and dark themes from the header. Signing out returns you to the portal login.",
    },
];

/// Visibility lifecycle of the tutorial overlay.
#[derive(Debug, Default)]
pub struct TutorialState {
    open: bool,
    step: usize,
}

impl TutorialState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Open the overlay at the first step.
    pub fn open(&mut self) {
        self.open = true;
        self.step = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Move to the next step; closes after the last one.
    pub fn advance(&mut self) {
        if self.step + 1 < TUTORIAL_STEPS.len() {
            self.step += 1;
        } else {
            self.close();
        }
    }
}

/// Render the tutorial overlay above the dashboard.
pub fn render_tutorial(f: &mut Frame, state: &TutorialState, palette: &Palette) {
    if !state.is_open() {
        return;
    }
    let step = &TUTORIAL_STEPS[state.step().min(TUTORIAL_STEPS.len() - 1)];

    let area = centered_rect(f.area(), 54, 10);
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(
            " TUTORIAL {}/{} ",
            state.step() + 1,
            TUTORIAL_STEPS.len()
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.panel))
        .padding(Padding::uniform(1));

    let lines = vec![
        Line::from(Span::styled(
            step.title,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(step.body, Style::default().fg(palette.muted))),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Next  [Esc] Close",
            Style::default().fg(palette.primary),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Center a fixed-size rect inside `area`, clamped to its bounds.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(area.height.saturating_sub(height) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(area.width.saturating_sub(width) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_starts_at_first_step() {
        let mut tutorial = TutorialState::default();
        assert!(!tutorial.is_open());
        tutorial.open();
        assert!(tutorial.is_open());
        assert_eq!(tutorial.step(), 0);
    }

    #[test]
    fn test_advance_walks_steps_then_closes() {
        let mut tutorial = TutorialState::default();
        tutorial.open();
        for expected in 1..TUTORIAL_STEPS.len() {
            tutorial.advance();
            assert!(tutorial.is_open());
            assert_eq!(tutorial.step(), expected);
        }
        tutorial.advance();
        assert!(!tutorial.is_open());
    }

    #[test]
    fn test_reopen_resets_to_first_step() {
        let mut tutorial = TutorialState::default();
        tutorial.open();
        tutorial.advance();
        tutorial.close();
        tutorial.open();
        assert_eq!(tutorial.step(), 0);
    }
}
