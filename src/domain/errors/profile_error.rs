//! Profile loading error types.

use thiserror::Error;

use super::ApiError;

/// Profile fetch failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// Session is not authenticated; nothing was requested.
    #[error("You must be signed in to view this page.")]
    NotAuthenticated,

    /// Request failed or the server reported failure.
    #[error("{0}")]
    Api(#[from] ApiError),
}
