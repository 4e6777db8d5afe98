//! Domain error types.

mod api_error;
mod profile_error;
mod session_error;

pub use api_error::ApiError;
pub use profile_error::ProfileError;
pub use session_error::{SessionError, SignupError, SignupPhase};
