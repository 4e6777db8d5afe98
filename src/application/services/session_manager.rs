//! Shared authentication state and the operations that drive it.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::domain::cancellation::CancellationToken;
use crate::domain::entities::{Credentials, SignupData};
use crate::domain::errors::{ApiError, SessionError, SignupError, SignupPhase};
use crate::domain::ports::AuthApiPort;
use crate::domain::session::{SessionSnapshot, SessionStatus};

/// Shown when the startup check fails for reasons other than a missing session.
pub const VERIFY_FAILED_MESSAGE: &str = "Could not verify session. The server may be down.";
/// Default login rejection message.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";
/// Login failure that is not a credential rejection.
pub const LOGIN_FAILED_MESSAGE: &str =
    "An unexpected server error occurred. Please try again later.";
/// Default duplicate-account message.
pub const ACCOUNT_EXISTS_MESSAGE: &str = "An account with this email already exists.";
/// Default registration failure message.
pub const SIGNUP_FAILED_MESSAGE: &str = "An unexpected error occurred during sign-up.";
/// Default logout failure message.
pub const LOGOUT_FAILED_MESSAGE: &str = "Logout failed. Please try again.";

/// Result of the startup session check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Check finished and the status was updated.
    Completed(SessionStatus),
    /// Check was abandoned; state is untouched.
    Cancelled,
}

struct Inner {
    api: Arc<dyn AuthApiPort>,
    state: watch::Sender<SessionSnapshot>,
}

/// Handle to the process-wide session state.
///
/// Clones share the same state. Every operation replaces status and error
/// together, and subscribers observe each replacement.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<Inner>,
}

impl SessionManager {
    /// Creates manager in the `Verifying` state.
    #[must_use]
    pub fn new(api: Arc<dyn AuthApiPort>) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self {
            inner: Arc::new(Inner { api, state }),
        }
    }

    /// Returns copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    /// Returns current status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.inner.state.borrow().status
    }

    /// Returns current error message.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.inner.state.borrow().error.clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.state.subscribe()
    }

    fn replace(&self, snapshot: SessionSnapshot) {
        debug!(status = %snapshot.status, error = ?snapshot.error, "Session state replaced");
        self.inner.state.send_replace(snapshot);
    }

    fn begin(&self) {
        self.replace(SessionSnapshot::new(SessionStatus::Verifying));
    }

    /// Checks the existing session cookie against the server.
    ///
    /// Cancelling `cancel` drops the in-flight request and leaves state untouched.
    pub async fn verify(&self, cancel: &CancellationToken) -> VerifyOutcome {
        if cancel.is_cancelled() {
            return VerifyOutcome::Cancelled;
        }

        debug!("Verifying existing session");

        let result = tokio::select! {
            biased;

            () = cancel.cancelled() => {
                debug!("Session verification cancelled");
                return VerifyOutcome::Cancelled;
            }

            result = self.inner.api.verify_session() => result,
        };

        if cancel.is_cancelled() {
            debug!("Discarding verification result after cancellation");
            return VerifyOutcome::Cancelled;
        }

        let snapshot = match result {
            Ok(()) => {
                info!("Existing session is valid");
                SessionSnapshot::new(SessionStatus::Authenticated)
            }
            Err(e) if e.is_rejected() => {
                info!("No active session");
                SessionSnapshot::new(SessionStatus::Unauthenticated)
            }
            Err(e) if e.is_network_error() => {
                warn!(error = %e, "Server unreachable during session verification");
                SessionSnapshot::with_error(SessionStatus::Error, VERIFY_FAILED_MESSAGE)
            }
            Err(e) => {
                warn!(error = %e, "Session verification failed");
                SessionSnapshot::with_error(SessionStatus::Error, VERIFY_FAILED_MESSAGE)
            }
        };

        let status = snapshot.status;
        self.replace(snapshot);
        VerifyOutcome::Completed(status)
    }

    /// Signs in with the given credentials.
    ///
    /// # Errors
    /// Returns `Rejected` when the server refuses the credentials and
    /// `Unexpected` for any other failure. The same message is stored in the
    /// shared state.
    pub async fn login(&self, credentials: Credentials) -> Result<(), SessionError> {
        self.begin();
        debug!(email = %credentials.email, "Attempting login");

        match self.inner.api.login(&credentials).await {
            Ok(()) => {
                info!(email = %credentials.email, "Login successful");
                self.replace(SessionSnapshot::new(SessionStatus::Authenticated));
                Ok(())
            }
            Err(e) if e.is_rejected() => {
                let message = server_message_or(&e, INVALID_CREDENTIALS_MESSAGE);
                warn!(email = %credentials.email, "Login rejected");
                self.replace(SessionSnapshot::with_error(
                    SessionStatus::Unauthenticated,
                    message.clone(),
                ));
                Err(SessionError::rejected(message))
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                self.replace(SessionSnapshot::with_error(
                    SessionStatus::Error,
                    LOGIN_FAILED_MESSAGE,
                ));
                Err(SessionError::unexpected(LOGIN_FAILED_MESSAGE))
            }
        }
    }

    /// Registers a new account, then signs in with the same credentials.
    ///
    /// # Errors
    /// Returns the failed phase with its error. A failed login phase keeps the
    /// state the login left behind.
    pub async fn signup(&self, data: SignupData) -> Result<(), SignupError> {
        self.begin();

        self.register(&data)
            .await
            .map_err(|e| SignupError::new(SignupPhase::Registration, e))?;

        info!(email = %data.email, "Registration successful, signing in");

        self.login(data.credentials())
            .await
            .map_err(|e| SignupError::new(SignupPhase::Login, e))
    }

    async fn register(&self, data: &SignupData) -> Result<(), SessionError> {
        debug!(email = %data.email, "Registering account");

        match self.inner.api.register(data).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_conflict() => {
                let message = server_message_or(&e, ACCOUNT_EXISTS_MESSAGE);
                warn!(email = %data.email, "Account already exists");
                self.replace(SessionSnapshot::with_error(
                    SessionStatus::Unauthenticated,
                    message.clone(),
                ));
                Err(SessionError::conflict(message))
            }
            Err(e) => {
                let message = server_message_or(&e, SIGNUP_FAILED_MESSAGE);
                error!(error = %e, "Registration failed");
                self.replace(SessionSnapshot::with_error(
                    SessionStatus::Error,
                    message.clone(),
                ));
                Err(SessionError::unexpected(message))
            }
        }
    }

    /// Ends the current session.
    ///
    /// A rejection means the session was already gone and counts as success.
    ///
    /// # Errors
    /// Returns `LogoutFailed` when the server could not end the session; the
    /// status reverts to `Authenticated`.
    pub async fn logout(&self) -> Result<(), SessionError> {
        self.begin();
        debug!("Logging out");

        match self.inner.api.logout().await {
            Ok(()) => {
                info!("Logged out");
                self.replace(SessionSnapshot::new(SessionStatus::Unauthenticated));
                Ok(())
            }
            Err(e) if e.is_rejected() => {
                info!("Session was already closed");
                self.replace(SessionSnapshot::new(SessionStatus::Unauthenticated));
                Ok(())
            }
            Err(e) => {
                let message = server_message_or(&e, LOGOUT_FAILED_MESSAGE);
                error!(error = %e, "Logout failed");
                self.replace(SessionSnapshot::with_error(
                    SessionStatus::Authenticated,
                    message.clone(),
                ));
                Err(SessionError::logout_failed(message))
            }
        }
    }

    /// Clears the error message; an `Error` status becomes `Unauthenticated`.
    pub fn clear_error(&self) {
        self.inner.state.send_if_modified(|snapshot| {
            let had_error = snapshot.error.take().is_some();
            if snapshot.status == SessionStatus::Error {
                snapshot.status = SessionStatus::Unauthenticated;
                return true;
            }
            had_error
        });
    }
}

fn server_message_or(error: &ApiError, default: &str) -> String {
    error.server_message().unwrap_or(default).to_string()
}
