use serde::Deserialize;

use crate::domain::entities::UserProfile;

/// Error body returned by the account API.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message, used verbatim when present.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Returns message when present and non-blank.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.message.filter(|m| !m.trim().is_empty())
    }
}

/// Profile endpoint envelope.
#[derive(Debug, Deserialize)]
pub struct ProfileEnvelope {
    /// Whether the server considers the request successful.
    pub success: bool,
    /// Server message.
    #[serde(default)]
    pub message: Option<String>,
    /// Payload, present on success.
    #[serde(default)]
    pub data: Option<ProfileData>,
}

/// Profile payload.
#[derive(Debug, Deserialize)]
pub struct ProfileData {
    /// Signed-in account.
    pub user: UserProfile,
}
