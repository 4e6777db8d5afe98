//! Remote API error types.

use thiserror::Error;

/// Failure of a single request against the account API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("resource already exists")]
    Conflict { message: Option<String> },

    #[error("unexpected response status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("{message}")]
    Reported { message: String },
}

impl ApiError {
    /// Maps an unsuccessful HTTP status and optional server message.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => Self::Rejected { status, message },
            409 => Self::Conflict { message },
            _ => Self::Status { status, message },
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Creates error for a response whose body reports failure.
    #[must_use]
    pub fn reported(message: impl Into<String>) -> Self {
        Self::Reported {
            message: message.into(),
        }
    }

    /// Returns server-provided message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. }
            | Self::Conflict { message }
            | Self::Status { message, .. } => message.as_deref(),
            Self::Reported { message } => Some(message),
            Self::Network { .. } | Self::InvalidResponse { .. } => None,
        }
    }

    /// Returns whether the server rejected the caller's identity.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Returns whether the server reported a duplicate resource.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Returns whether the request never got an HTTP response.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(401 ; "unauthorized")]
    #[test_case(403 ; "forbidden")]
    fn test_auth_statuses_are_rejected(status: u16) {
        assert!(ApiError::from_status(status, None).is_rejected());
    }

    #[test]
    fn test_conflict_status() {
        let error = ApiError::from_status(409, Some("taken".to_string()));
        assert!(error.is_conflict());
        assert_eq!(error.server_message(), Some("taken"));
    }

    #[test_case(400 ; "bad request")]
    #[test_case(404 ; "not found")]
    #[test_case(500 ; "server error")]
    #[test_case(503 ; "unavailable")]
    fn test_other_statuses_are_unexpected(status: u16) {
        let error = ApiError::from_status(status, None);
        assert!(matches!(error, ApiError::Status { status: s, .. } if s == status));
        assert!(!error.is_rejected());
    }

    #[test]
    fn test_network_has_no_server_message() {
        assert_eq!(ApiError::network("refused").server_message(), None);
    }
}
