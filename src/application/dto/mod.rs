//! Data transfer objects for the application layer.

mod auth_dto;
mod profile_view;

pub use auth_dto::{SignInForm, SignUpForm};
pub use profile_view::{DEFAULT_DATE_FORMAT, ProfileView, format_date};
