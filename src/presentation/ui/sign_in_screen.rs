//! Sign-in screen.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::form::{FormAction, FormFields};
use super::layout::{card, centered};
use crate::application::dto::SignInForm;
use crate::domain::{SessionSnapshot, SessionStatus};
use crate::presentation::widgets::TextInput;

const EMAIL: usize = 0;
const PASSWORD: usize = 1;

/// Sign-in form state.
#[derive(Debug, Clone)]
pub struct SignInState {
    fields: FormFields,
    validation_error: Option<String>,
}

impl SignInState {
    /// Creates empty form with email focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: FormFields::new(vec![
                TextInput::new("Email").placeholder("johndoe@example.com"),
                TextInput::new("Password").password().placeholder("********"),
            ]),
            validation_error: None,
        }
    }

    /// Returns current form values.
    #[must_use]
    pub fn form(&self) -> SignInForm {
        SignInForm::new(self.fields.value(EMAIL), self.fields.value(PASSWORD))
    }

    /// Returns focused field index.
    #[must_use]
    pub const fn focus(&self) -> usize {
        self.fields.focus()
    }

    /// Sets a local validation message.
    pub fn set_validation_error(&mut self, message: impl Into<String>) {
        self.validation_error = Some(message.into());
    }

    /// Returns local validation message.
    #[must_use]
    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// Clears all fields.
    pub fn reset(&mut self) {
        self.fields.reset();
        self.validation_error = None;
    }

    /// Handles key event. Submission is ignored while a request is in flight.
    pub fn handle_key(&mut self, key: KeyEvent, status: SessionStatus) -> FormAction {
        match self.fields.handle_key(key) {
            FormAction::Submit if status.is_busy() => FormAction::None,
            FormAction::Submit => {
                self.validation_error = None;
                FormAction::Submit
            }
            FormAction::Edited => {
                self.validation_error = None;
                FormAction::Edited
            }
            other => other,
        }
    }
}

impl Default for SignInState {
    fn default() -> Self {
        Self::new()
    }
}

/// Sign-in screen. Reads error and busy state from the session snapshot.
pub struct SignInScreen<'a> {
    session: &'a SessionSnapshot,
}

impl<'a> SignInScreen<'a> {
    /// Creates screen for the given session snapshot.
    #[must_use]
    pub const fn new(session: &'a SessionSnapshot) -> Self {
        Self { session }
    }
}

impl StatefulWidget for SignInScreen<'_> {
    type State = SignInState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let content_area = centered(area, 56, 16);
        Clear.render(content_area, buf);

        let block = card("Sign In to Your Account", Color::Cyan);
        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [description, _, email, password, _, error, submit, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("Enter your credentials below to access your dashboard.")
            .style(Style::default().fg(Color::Gray))
            .render(description, buf);

        let inputs = state.fields.inputs();
        (&inputs[EMAIL]).render(email, buf);
        (&inputs[PASSWORD]).render(password, buf);

        if let Some(message) = state.validation_error().or(self.session.error()) {
            Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .render(error, buf);
        }

        Paragraph::new(submit_hint(self.session.status, "Sign In", "Signing In..."))
            .render(submit, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Don't have an account? ", Style::default().fg(Color::DarkGray)),
            Span::styled("F4: Sign Up", Style::default().fg(Color::Cyan)),
        ]))
        .render(footer, buf);
    }
}

/// Submit line: the action hint, or the busy label while verifying.
pub(super) fn submit_hint(
    status: SessionStatus,
    label: &'static str,
    busy_label: &'static str,
) -> Line<'static> {
    if status.is_busy() {
        Line::from(Span::styled(
            busy_label,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(vec![
            Span::styled("Enter: ", Style::default().fg(Color::DarkGray)),
            Span::styled(label, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(" | Tab: Next field", Style::default().fg(Color::DarkGray)),
        ])
    }
}
