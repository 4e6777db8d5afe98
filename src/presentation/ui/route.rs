//! Screen routing.

use crate::domain::SessionStatus;
use crate::presentation::events::NavCommand;

/// Screen currently shown below the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Landing screen.
    #[default]
    Home,
    /// Sign-in form.
    SignIn,
    /// Sign-up form.
    SignUp,
    /// Protected dashboard.
    Dashboard,
}

impl Route {
    /// Returns screen title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::Dashboard => "Dashboard",
        }
    }

    /// Resolves a navigation key against the current status.
    ///
    /// Sign-in and sign-up are only reachable while signed out. Logout is not a
    /// route and yields `None`.
    #[must_use]
    pub const fn for_command(command: NavCommand, status: SessionStatus) -> Option<Self> {
        match command {
            NavCommand::Home => Some(Self::Home),
            NavCommand::Dashboard => Some(Self::Dashboard),
            NavCommand::SignIn if matches!(status, SessionStatus::Unauthenticated) => {
                Some(Self::SignIn)
            }
            NavCommand::SignUp if matches!(status, SessionStatus::Unauthenticated) => {
                Some(Self::SignUp)
            }
            NavCommand::SignIn | NavCommand::SignUp | NavCommand::Logout => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(NavCommand::SignIn, SessionStatus::Unauthenticated, Some(Route::SignIn))]
    #[test_case(NavCommand::SignIn, SessionStatus::Authenticated, None)]
    #[test_case(NavCommand::SignUp, SessionStatus::Verifying, None)]
    #[test_case(NavCommand::SignUp, SessionStatus::Unauthenticated, Some(Route::SignUp))]
    #[test_case(NavCommand::Dashboard, SessionStatus::Error, Some(Route::Dashboard))]
    #[test_case(NavCommand::Home, SessionStatus::Verifying, Some(Route::Home))]
    #[test_case(NavCommand::Logout, SessionStatus::Authenticated, None)]
    fn test_for_command(command: NavCommand, status: SessionStatus, expected: Option<Route>) {
        assert_eq!(Route::for_command(command, status), expected);
    }
}
