//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Global navigation command bound to a function key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// `F1`.
    Home,
    /// `F2`.
    Dashboard,
    /// `F3`.
    SignIn,
    /// `F4`.
    SignUp,
    /// `F5`.
    Logout,
}

impl NavCommand {
    /// Returns the key label shown in the navigation bar.
    #[must_use]
    pub const fn key_label(self) -> &'static str {
        match self {
            Self::Home => "F1",
            Self::Dashboard => "F2",
            Self::SignIn => "F3",
            Self::SignUp => "F4",
            Self::Logout => "F5",
        }
    }
}

/// Stateless key classification.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Checks if key moves focus to the next form field.
    #[must_use]
    pub fn is_next_field_event(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => !key.modifiers.contains(KeyModifiers::SHIFT),
            KeyCode::Down => true,
            _ => false,
        }
    }

    /// Checks if key moves focus to the previous form field.
    #[must_use]
    pub fn is_prev_field_event(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::BackTab | KeyCode::Up => true,
            KeyCode::Tab => key.modifiers.contains(KeyModifiers::SHIFT),
            _ => false,
        }
    }

    /// Maps function keys to navigation commands.
    #[must_use]
    pub const fn nav_command(key: &KeyEvent) -> Option<NavCommand> {
        match key.code {
            KeyCode::F(1) => Some(NavCommand::Home),
            KeyCode::F(2) => Some(NavCommand::Dashboard),
            KeyCode::F(3) => Some(NavCommand::SignIn),
            KeyCode::F(4) => Some(NavCommand::SignUp),
            KeyCode::F(5) => Some(NavCommand::Logout),
            _ => None,
        }
    }
}
