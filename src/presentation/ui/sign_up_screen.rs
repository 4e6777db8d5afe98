//! Sign-up screen.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, StatefulWidget, Widget},
};

use super::form::{FormAction, FormFields};
use super::layout::{card, centered};
use super::sign_in_screen::submit_hint;
use crate::application::dto::SignUpForm;
use crate::domain::{SessionSnapshot, SessionStatus};
use crate::presentation::widgets::TextInput;

const NAME: usize = 0;
const EMAIL: usize = 1;
const PASSWORD: usize = 2;
const CONFIRM_PASSWORD: usize = 3;
const PHONE: usize = 4;
const DATE_OF_BIRTH: usize = 5;
const ADDRESS: usize = 6;
const OCCUPATION: usize = 7;
const INSTITUTION: usize = 8;
const YEAR: usize = 9;

/// Sign-up form state.
#[derive(Debug, Clone)]
pub struct SignUpState {
    fields: FormFields,
    validation_error: Option<String>,
}

impl SignUpState {
    /// Creates empty form with name focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: FormFields::new(vec![
                TextInput::new("Name").placeholder("John Doe"),
                TextInput::new("Email").placeholder("johndoe@example.com"),
                TextInput::new("Password").password().placeholder("********"),
                TextInput::new("Confirm Password")
                    .password()
                    .placeholder("********"),
                TextInput::new("Phone Number").placeholder("01XXXXXXXXX"),
                TextInput::new("Date of Birth").placeholder("YYYY-MM-DD"),
                TextInput::new("Address").placeholder("123 Main St, Anytown"),
                TextInput::new("Occupation").placeholder("Student / Professional"),
                TextInput::new("Institution").placeholder("Your University or Company"),
                TextInput::new("Year / Level").placeholder("4"),
            ]),
            validation_error: None,
        }
    }

    /// Returns current form values.
    #[must_use]
    pub fn form(&self) -> SignUpForm {
        let value = |index| self.fields.value(index).to_string();
        SignUpForm {
            name: value(NAME),
            email: value(EMAIL),
            password: value(PASSWORD),
            confirm_password: value(CONFIRM_PASSWORD),
            phone: value(PHONE),
            address: value(ADDRESS),
            date_of_birth: value(DATE_OF_BIRTH),
            occupation: value(OCCUPATION),
            institution: value(INSTITUTION),
            year: value(YEAR),
        }
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

impl Default for SignUpState {
    fn default() -> Self {
        Self::new()
    }
}

/// Sign-up screen, two fields per row.
pub struct SignUpScreen<'a> {
    session: &'a SessionSnapshot,
}

impl<'a> SignUpScreen<'a> {
    /// Creates screen for the given session snapshot.
    #[must_use]
    pub const fn new(session: &'a SessionSnapshot) -> Self {
        Self { session }
    }
}

impl StatefulWidget for SignUpScreen<'_> {
    type State = SignUpState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let content_area = centered(area, 80, 21);
        Clear.render(content_area, buf);

        let block = card("Create an Account", Color::Cyan);
        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [description, grid, error, submit, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(15),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("Enter your details below to start your journey with us.")
            .style(Style::default().fg(Color::Gray))
            .render(description, buf);

        let rows = Layout::vertical([Constraint::Length(3); 5]).split(grid);
        for (row, pair) in rows.iter().zip(state.fields.inputs().chunks(2)) {
            let [left, right] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(*row);
            if let Some(input) = pair.first() {
                input.render(left, buf);
            }
            if let Some(input) = pair.get(1) {
                input.render(right, buf);
            }
        }

        if let Some(message) = state.validation_error().or(self.session.error()) {
            Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .render(error, buf);
        }

        Paragraph::new(submit_hint(self.session.status, "Sign Up", "Processing..."))
            .render(submit, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Already have an account? ", Style::default().fg(Color::DarkGray)),
            Span::styled("F3: Sign In", Style::default().fg(Color::Cyan)),
        ]))
        .render(footer, buf);
    }
}
