//! Caller-side form validation.
//!
//! Runs before any session operation; failures never reach the session manager.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::application::dto::{SignInForm, SignUpForm};
use crate::domain::entities::{Credentials, Password, SignupData};

/// Form validation failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Sign-in email or password missing.
    #[error("Email and password are required.")]
    MissingCredentials,

    /// Required sign-up field left blank.
    #[error("{field} is required.")]
    MissingField {
        /// Field label.
        field: &'static str,
    },

    /// Email does not look like an address.
    #[error("Enter a valid email address.")]
    InvalidEmail,

    /// Date of birth is not `YYYY-MM-DD`.
    #[error("Date of birth must be in YYYY-MM-DD format.")]
    InvalidDate,

    /// Year is not a positive integer.
    #[error("Year must be a positive whole number.")]
    InvalidYear,

    /// Password and confirmation differ.
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Returns whether the value looks like `local@domain.tld`.
///
/// # Panics
///
/// Panics if the internal regex is invalid.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));
    re.is_match(value)
}

/// Validates the sign-in form.
///
/// # Errors
/// Returns `MissingCredentials` if either field is empty.
pub fn validate_sign_in(form: &SignInForm) -> Result<Credentials, ValidationError> {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(Credentials::new(email, form.password.as_str()))
}

/// Validates the sign-up form and strips the confirmation.
///
/// # Errors
/// Returns the first failed rule in field order; the password confirmation is
/// checked last.
pub fn validate_sign_up(form: &SignUpForm) -> Result<SignupData, ValidationError> {
    let name = required("Name", &form.name)?;
    let email = required("Email", &form.email)?;
    if form.password.is_empty() {
        return Err(ValidationError::MissingField { field: "Password" });
    }
    if form.confirm_password.is_empty() {
        return Err(ValidationError::MissingField {
            field: "Confirm Password",
        });
    }
    let phone = required("Phone Number", &form.phone)?;
    let date_of_birth = required("Date of Birth", &form.date_of_birth)?;
    let address = required("Address", &form.address)?;
    let occupation = required("Occupation", &form.occupation)?;
    let institution = required("Institution", &form.institution)?;

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d").is_err() {
        return Err(ValidationError::InvalidDate);
    }

    let year = match form.year.trim() {
        "" => None,
        raw => match raw.parse::<u32>() {
            Ok(year) if year > 0 => Some(year),
            _ => return Err(ValidationError::InvalidYear),
        },
    };

    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(SignupData {
        name: name.to_string(),
        email: email.to_string(),
        password: Password::new(form.password.as_str()),
        phone: phone.to_string(),
        address: address.to_string(),
        date_of_birth: date_of_birth.to_string(),
        occupation: occupation.to_string(),
        institution: institution.to_string(),
        year,
    })
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn filled_form() -> SignUpForm {
        SignUpForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            phone: "01700000000".to_string(),
            address: "123 Main St".to_string(),
            date_of_birth: "2001-04-09".to_string(),
            occupation: "Student".to_string(),
            institution: "State University".to_string(),
            year: "4".to_string(),
        }
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        assert_eq!(
            validate_sign_in(&SignInForm::new("", "pw")),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            validate_sign_in(&SignInForm::new("jane@example.com", "")),
            Err(ValidationError::MissingCredentials)
        );
    }

    #[test]
    fn test_sign_in_trims_email() {
        let credentials = validate_sign_in(&SignInForm::new("  jane@example.com ", "pw")).unwrap();
        assert_eq!(credentials.email, "jane@example.com");
        assert_eq!(credentials.password.expose(), "pw");
    }

    #[test]
    fn test_sign_up_valid_form() {
        let data = validate_sign_up(&filled_form()).unwrap();

        assert_eq!(data.name, "Jane Doe");
        assert_eq!(data.year, Some(4));
        assert_eq!(data.password.expose(), "hunter22");
    }

    #[test]
    fn test_sign_up_password_mismatch() {
        let mut form = filled_form();
        form.confirm_password = "hunter23".to_string();

        assert_eq!(
            validate_sign_up(&form),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
    }

    #[test]
    fn test_sign_up_missing_field_names_label() {
        let mut form = filled_form();
        form.institution = "   ".to_string();

        let error = validate_sign_up(&form).unwrap_err();

        assert_eq!(error.to_string(), "Institution is required.");
    }

    #[test]
    fn test_sign_up_year_is_optional() {
        let mut form = filled_form();
        form.year.clear();

        assert_eq!(validate_sign_up(&form).unwrap().year, None);
    }

    #[test_case("abc" ; "letters")]
    #[test_case("0" ; "zero")]
    #[test_case("-2" ; "negative")]
    fn test_sign_up_rejects_bad_year(year: &str) {
        let mut form = filled_form();
        form.year = year.to_string();

        assert_eq!(validate_sign_up(&form), Err(ValidationError::InvalidYear));
    }

    #[test_case("09/04/2001" ; "slashes")]
    #[test_case("2001-13-01" ; "bad month")]
    fn test_sign_up_rejects_bad_date(date: &str) {
        let mut form = filled_form();
        form.date_of_birth = date.to_string();

        assert_eq!(validate_sign_up(&form), Err(ValidationError::InvalidDate));
    }

    #[test_case("jane@example.com", true ; "plain")]
    #[test_case("jane.doe+tag@mail.example.org", true ; "subdomain")]
    #[test_case("jane@localhost", false ; "no tld")]
    #[test_case("jane example.com", false ; "no at")]
    fn test_email_shape(email: &str, expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }
}
