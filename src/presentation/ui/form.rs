//! Focus and editing shared by the sign-in and sign-up forms.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::events::EventHandler;
use crate::presentation::widgets::TextInput;

/// Outcome of a key press inside a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Nothing changed.
    None,
    /// Focus moved.
    Moved,
    /// A field value changed.
    Edited,
    /// Submit requested.
    Submit,
}

/// Ordered set of inputs with one focused field.
#[derive(Debug, Clone)]
pub struct FormFields {
    inputs: Vec<TextInput>,
    focus: usize,
}

impl FormFields {
    /// Creates form and focuses the first field.
    #[must_use]
    pub fn new(inputs: Vec<TextInput>) -> Self {
        let mut fields = Self { inputs, focus: 0 };
        fields.sync_focus();
        fields
    }

    fn sync_focus(&mut self) {
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.set_focused(i == self.focus);
        }
    }

    /// Returns focused field index.
    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// Returns all inputs in order.
    #[must_use]
    pub fn inputs(&self) -> &[TextInput] {
        &self.inputs
    }

    /// Returns value of field at index, or empty.
    #[must_use]
    pub fn value(&self, index: usize) -> &str {
        self.inputs.get(index).map_or("", TextInput::value)
    }

    /// Clears every field and focuses the first.
    pub fn reset(&mut self) {
        for input in &mut self.inputs {
            input.clear();
        }
        self.focus = 0;
        self.sync_focus();
    }

    /// Moves focus to next field, wrapping.
    pub fn focus_next(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + 1) % self.inputs.len();
            self.sync_focus();
        }
    }

    /// Moves focus to previous field, wrapping.
    pub fn focus_prev(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
            self.sync_focus();
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if EventHandler::is_submit_event(&key) {
            return FormAction::Submit;
        }
        if EventHandler::is_next_field_event(&key) {
            self.focus_next();
            return FormAction::Moved;
        }
        if EventHandler::is_prev_field_event(&key) {
            self.focus_prev();
            return FormAction::Moved;
        }

        let Some(input) = self.inputs.get_mut(self.focus) else {
            return FormAction::None;
        };

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                input.input_char(c);
                FormAction::Edited
            }
            KeyCode::Backspace => {
                input.backspace();
                FormAction::Edited
            }
            KeyCode::Delete => {
                input.delete();
                FormAction::Edited
            }
            KeyCode::Left => {
                input.move_left();
                FormAction::None
            }
            KeyCode::Right => {
                input.move_right();
                FormAction::None
            }
            KeyCode::Home => {
                input.move_start();
                FormAction::None
            }
            KeyCode::End => {
                input.move_end();
                FormAction::None
            }
            _ => FormAction::None,
        }
    }
}
