//! Session status definitions.

/// Authentication status of the current visitor.
///
/// This is the single source of truth for access to protected screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    /// Status not yet known or an operation is in flight.
    #[default]
    Verifying,
    /// Server confirmed a valid session.
    Authenticated,
    /// No session, or the server rejected the credentials.
    Unauthenticated,
    /// Unexpected failure while talking to the server.
    Error,
}

impl SessionStatus {
    /// Returns label for display.
    #[must_use]
    pub const fn display_text(self) -> &'static str {
        match self {
            Self::Verifying => "VERIFYING",
            Self::Authenticated => "SIGNED IN",
            Self::Unauthenticated => "SIGNED OUT",
            Self::Error => "ERROR",
        }
    }

    /// Returns whether protected content may be shown.
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Returns whether an operation is in flight.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Verifying)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Status and error message, always replaced together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    /// Current status.
    pub status: SessionStatus,
    /// User-facing error attached to the status.
    pub error: Option<String>,
}

impl SessionSnapshot {
    /// Creates snapshot without error.
    #[must_use]
    pub const fn new(status: SessionStatus) -> Self {
        Self {
            status,
            error: None,
        }
    }

    /// Creates snapshot with error message.
    #[must_use]
    pub fn with_error(status: SessionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            error: Some(message.into()),
        }
    }

    /// Returns error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_verifying() {
        let snapshot = SessionSnapshot::default();
        assert_eq!(snapshot.status, SessionStatus::Verifying);
        assert!(snapshot.error().is_none());
    }

    #[test]
    fn test_status_predicates() {
        assert!(SessionStatus::Authenticated.is_authenticated());
        assert!(!SessionStatus::Error.is_authenticated());
        assert!(SessionStatus::Verifying.is_busy());
        assert!(!SessionStatus::Unauthenticated.is_busy());
    }

    #[test]
    fn test_with_error() {
        let snapshot = SessionSnapshot::with_error(SessionStatus::Error, "boom");
        assert_eq!(snapshot.error(), Some("boom"));
    }
}
