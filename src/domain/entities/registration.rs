//! Registration payload.

use serde::Serialize;

use super::credentials::{Credentials, Password};

/// Profile data submitted to the registration endpoint.
///
/// Password confirmation is checked by the caller and never part of this payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: Password,
    pub phone: String,
    pub address: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub occupation: String,
    pub institution: String,
    /// Study year or level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

impl SignupData {
    /// Returns credentials for the follow-up login.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(year: Option<u32>) -> SignupData {
        SignupData {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: Password::new("hunter22"),
            phone: "01700000000".to_string(),
            address: "123 Main St".to_string(),
            date_of_birth: "2001-04-09".to_string(),
            occupation: "Student".to_string(),
            institution: "State University".to_string(),
            year,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample(Some(4))).unwrap();

        assert_eq!(json["dateOfBirth"], "2001-04-09");
        assert_eq!(json["year"], 4);
        assert_eq!(json["password"], "hunter22");
        assert!(json.get("date_of_birth").is_none());
    }

    #[test]
    fn test_year_omitted_when_absent() {
        let json = serde_json::to_value(sample(None)).unwrap();
        assert!(json.get("year").is_none());
    }

    #[test]
    fn test_credentials_reuse_submitted_values() {
        let credentials = sample(None).credentials();
        assert_eq!(credentials.email, "jane@example.com");
        assert_eq!(credentials.password.expose(), "hunter22");
    }
}
