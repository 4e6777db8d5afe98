//! Application services.

mod session_manager;
pub mod validation;

pub use session_manager::{
    ACCOUNT_EXISTS_MESSAGE, INVALID_CREDENTIALS_MESSAGE, LOGIN_FAILED_MESSAGE,
    LOGOUT_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE, SessionManager, VERIFY_FAILED_MESSAGE,
    VerifyOutcome,
};
pub use validation::{ValidationError, validate_sign_in, validate_sign_up};
