//! Profile fetch use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::SessionManager;
use crate::domain::entities::UserProfile;
use crate::domain::errors::ProfileError;
use crate::domain::ports::AuthApiPort;

/// Loads the signed-in account's profile.
///
/// Never touches session state: a failed fetch leaves the status as it was.
#[derive(Clone)]
pub struct FetchProfileUseCase {
    api: Arc<dyn AuthApiPort>,
    session: SessionManager,
}

impl FetchProfileUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(api: Arc<dyn AuthApiPort>, session: SessionManager) -> Self {
        Self { api, session }
    }

    /// Fetches profile for the current session.
    ///
    /// # Errors
    /// Returns `NotAuthenticated` without issuing a request unless the session
    /// is authenticated, or the API failure otherwise.
    pub async fn execute(&self) -> Result<UserProfile, ProfileError> {
        let status = self.session.status();
        if !status.is_authenticated() {
            debug!(status = %status, "Skipping profile fetch");
            return Err(ProfileError::NotAuthenticated);
        }

        match self.api.fetch_profile().await {
            Ok(profile) => {
                info!(user_id = %profile.id(), "Profile loaded");
                Ok(profile)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load profile");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Credentials;
    use crate::domain::errors::ApiError;
    use crate::domain::ports::mocks::MockAuthApi;
    use crate::domain::session::SessionStatus;

    async fn signed_in(api: MockAuthApi) -> (FetchProfileUseCase, SessionManager, Arc<MockAuthApi>) {
        let api = Arc::new(api);
        let session = SessionManager::new(api.clone());
        session
            .login(Credentials::new("jane@example.com", "hunter22"))
            .await
            .unwrap();
        (
            FetchProfileUseCase::new(api.clone(), session.clone()),
            session,
            api,
        )
    }

    #[tokio::test]
    async fn test_fetches_when_authenticated() {
        let (use_case, _, _) = signed_in(MockAuthApi::new()).await;

        let profile = use_case.execute().await.unwrap();

        assert_eq!(profile.name(), "Jane Doe");
    }

    #[tokio::test]
    async fn test_skips_request_when_not_authenticated() {
        let api = Arc::new(MockAuthApi::new());
        let session = SessionManager::new(api.clone());
        let use_case = FetchProfileUseCase::new(api.clone(), session);

        let result = use_case.execute().await;

        assert_eq!(result, Err(ProfileError::NotAuthenticated));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failure_does_not_downgrade_session() {
        let (use_case, session, _) = signed_in(
            MockAuthApi::new().on_profile(Err(ApiError::reported("Profile unavailable."))),
        )
        .await;

        let error = use_case.execute().await.unwrap_err();

        assert_eq!(error.to_string(), "Profile unavailable.");
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.error(), None);
    }
}
