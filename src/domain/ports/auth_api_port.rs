//! Account API port definition.

use async_trait::async_trait;

use crate::domain::entities::{Credentials, SignupData, UserProfile};
use crate::domain::errors::ApiError;

/// Port for the remote session-cookie account API.
///
/// The session cookie is owned by the adapter; callers never see it.
#[async_trait]
pub trait AuthApiPort: Send + Sync {
    /// Checks whether the current session cookie is valid.
    async fn verify_session(&self) -> Result<(), ApiError>;

    /// Establishes a session for the given credentials.
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// Creates a new account. Does not establish a session.
    async fn register(&self, data: &SignupData) -> Result<(), ApiError>;

    /// Ends the current session.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Fetches the signed-in account's profile.
    async fn fetch_profile(&self) -> Result<UserProfile, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use chrono::{TimeZone, Utc};
    use tokio::sync::Notify;

    /// Returns a profile for tests.
    pub fn sample_profile() -> UserProfile {
        let joined = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
        UserProfile::new("42", "Jane Doe", "jane@example.com", "student", joined)
            .with_flags(true, true)
            .with_contact("01700000000", "123 Main St")
            .with_affiliation("Student", "State University", Some(4))
    }

    /// Scripted account API for testing.
    ///
    /// Each endpoint pops its next queued result and succeeds once the queue is empty.
    #[derive(Default)]
    pub struct MockAuthApi {
        verify: Mutex<VecDeque<Result<(), ApiError>>>,
        login: Mutex<VecDeque<Result<(), ApiError>>>,
        register: Mutex<VecDeque<Result<(), ApiError>>>,
        logout: Mutex<VecDeque<Result<(), ApiError>>>,
        profile: Mutex<VecDeque<Result<UserProfile, ApiError>>>,
        calls: Mutex<Vec<&'static str>>,
        verify_gate: Option<Arc<Notify>>,
    }

    impl MockAuthApi {
        /// Creates mock where every call succeeds.
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues verify result.
        pub fn on_verify(self, result: Result<(), ApiError>) -> Self {
            self.verify.lock().unwrap().push_back(result);
            self
        }

        /// Queues login result.
        pub fn on_login(self, result: Result<(), ApiError>) -> Self {
            self.login.lock().unwrap().push_back(result);
            self
        }

        /// Queues register result.
        pub fn on_register(self, result: Result<(), ApiError>) -> Self {
            self.register.lock().unwrap().push_back(result);
            self
        }

        /// Queues logout result.
        pub fn on_logout(self, result: Result<(), ApiError>) -> Self {
            self.logout.lock().unwrap().push_back(result);
            self
        }

        /// Queues profile result.
        pub fn on_profile(self, result: Result<UserProfile, ApiError>) -> Self {
            self.profile.lock().unwrap().push_back(result);
            self
        }

        /// Makes verify wait until the gate is notified.
        pub fn hold_verify(mut self, gate: Arc<Notify>) -> Self {
            self.verify_gate = Some(gate);
            self
        }

        /// Returns endpoint names in call order.
        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, name: &'static str) {
            self.calls.lock().unwrap().push(name);
        }

        fn next(queue: &Mutex<VecDeque<Result<(), ApiError>>>) -> Result<(), ApiError> {
            queue.lock().unwrap().pop_front().unwrap_or(Ok(()))
        }
    }

    #[async_trait]
    impl AuthApiPort for MockAuthApi {
        async fn verify_session(&self) -> Result<(), ApiError> {
            self.record("verify");
            if let Some(gate) = &self.verify_gate {
                gate.notified().await;
            }
            Self::next(&self.verify)
        }

        async fn login(&self, _credentials: &Credentials) -> Result<(), ApiError> {
            self.record("login");
            Self::next(&self.login)
        }

        async fn register(&self, _data: &SignupData) -> Result<(), ApiError> {
            self.record("register");
            Self::next(&self.register)
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.record("logout");
            Self::next(&self.logout)
        }

        async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
            self.record("profile");
            self.profile
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(sample_profile()))
        }
    }
}
