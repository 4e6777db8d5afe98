//! Domain layer with core business entities and port definitions.

/// Cancellation handle for in-flight requests.
pub mod cancellation;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Session status definitions.
pub mod session;

pub use cancellation::CancellationToken;
pub use entities::{Credentials, Password, SignupData, UserProfile};
pub use errors::{ApiError, ProfileError, SessionError, SignupError, SignupPhase};
pub use ports::AuthApiPort;
pub use session::{SessionSnapshot, SessionStatus};
