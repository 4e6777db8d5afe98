//! Raw form DTOs.

/// Sign-in form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    /// Email field.
    pub email: String,
    /// Password field.
    pub password: String,
}

impl SignInForm {
    /// Creates new form.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Sign-up form as typed by the user, including the password confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
    pub occupation: String,
    pub institution: String,
    /// Optional; digits only when present.
    pub year: String,
}
