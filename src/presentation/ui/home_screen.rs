//! Landing screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::layout::{card, centered};
use crate::domain::SessionStatus;

/// Landing screen with a status-dependent call to action.
pub struct HomeScreen {
    status: SessionStatus,
}

impl HomeScreen {
    /// Creates home screen.
    #[must_use]
    pub const fn new(status: SessionStatus) -> Self {
        Self { status }
    }

    fn call_to_action(&self) -> Line<'static> {
        let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        match self.status {
            SessionStatus::Verifying => Line::from(Span::styled(
                "Checking your session...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            SessionStatus::Authenticated => Line::from(vec![
                Span::raw("You are signed in. Press "),
                Span::styled("F2", key),
                Span::raw(" to open your dashboard."),
            ]),
            SessionStatus::Unauthenticated => Line::from(vec![
                Span::raw("Press "),
                Span::styled("F3", key),
                Span::raw(" to sign in or "),
                Span::styled("F4", key),
                Span::raw(" to create an account."),
            ]),
            SessionStatus::Error => Line::from(vec![
                Span::styled(
                    "The server could not be reached. ",
                    Style::default().fg(Color::Red),
                ),
                Span::raw("Press "),
                Span::styled("Enter", key),
                Span::raw(" to dismiss."),
            ]),
        }
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_area = centered(area, 60, 8);
        let block = card("Portico", Color::Cyan);
        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let lines = vec![
            Line::from(Span::styled(
                "Welcome",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your account portal, in the terminal.",
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
            self.call_to_action(),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn render(status: SessionStatus) -> String {
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        (&HomeScreen::new(status)).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test_case(SessionStatus::Verifying, "Checking your session" ; "verifying")]
    #[test_case(SessionStatus::Authenticated, "open your dashboard" ; "authenticated")]
    #[test_case(SessionStatus::Unauthenticated, "create an account" ; "unauthenticated")]
    #[test_case(SessionStatus::Error, "to dismiss" ; "error")]
    fn test_call_to_action(status: SessionStatus, expected: &str) {
        assert!(render(status).contains(expected));
    }
}
