//! Domain entity definitions.

mod credentials;
mod profile;
mod registration;

pub use credentials::{Credentials, Password};
pub use profile::UserProfile;
pub use registration::SignupData;
