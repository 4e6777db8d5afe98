//! Session operation error types.

use thiserror::Error;

/// Failure raised by a session operation.
///
/// The display text is exactly the message stored in the shared session state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SessionError {
    #[error("{message}")]
    Rejected { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Unexpected { message: String },

    #[error("{message}")]
    LogoutFailed { message: String },
}

impl SessionError {
    /// Creates rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates conflict error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Creates logout failure.
    #[must_use]
    pub fn logout_failed(message: impl Into<String>) -> Self {
        Self::LogoutFailed {
            message: message.into(),
        }
    }

    /// Returns user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected { message }
            | Self::Conflict { message }
            | Self::Unexpected { message }
            | Self::LogoutFailed { message } => message,
        }
    }

    /// Returns whether the user can fix this by resubmitting.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::Conflict { .. })
    }
}

/// Step of the sign-up workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupPhase {
    /// Account creation request.
    Registration,
    /// Follow-up login with the submitted credentials.
    Login,
}

impl SignupPhase {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Login => "login",
        }
    }
}

impl std::fmt::Display for SignupPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Sign-up failure tagged with the phase that failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{error}")]
pub struct SignupError {
    /// Failed phase.
    pub phase: SignupPhase,
    /// Underlying failure.
    #[source]
    pub error: SessionError,
}

impl SignupError {
    /// Creates new sign-up error.
    #[must_use]
    pub const fn new(phase: SignupPhase, error: SessionError) -> Self {
        Self { phase, error }
    }

    /// Returns user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.error.message()
    }
}
