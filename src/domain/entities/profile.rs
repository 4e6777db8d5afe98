//! Account profile entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Read-only projection of the signed-in account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    id: String,
    name: String,
    email: String,
    account_role: String,
    is_active: bool,
    is_verified: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    occupation: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    institution: String,
    #[serde(default)]
    year: Option<u32>,
}

impl UserProfile {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn account_role(&self) -> &str {
        &self.account_role
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.is_verified
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn occupation(&self) -> &str {
        &self.occupation
    }

    #[must_use]
    pub fn institution(&self) -> &str {
        &self.institution
    }

    #[must_use]
    pub const fn year(&self) -> Option<u32> {
        self.year
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
impl UserProfile {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        account_role: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            account_role: account_role.into(),
            is_active: true,
            is_verified: false,
            created_at,
            updated_at: created_at,
            phone: String::new(),
            address: String::new(),
            occupation: String::new(),
            institution: String::new(),
            year: None,
        }
    }

    #[must_use]
    pub const fn with_flags(mut self, is_active: bool, is_verified: bool) -> Self {
        self.is_active = is_active;
        self.is_verified = is_verified;
        self
    }

    #[must_use]
    pub fn with_contact(mut self, phone: impl Into<String>, address: impl Into<String>) -> Self {
        self.phone = phone.into();
        self.address = address.into();
        self
    }

    #[must_use]
    pub fn with_affiliation(
        mut self,
        occupation: impl Into<String>,
        institution: impl Into<String>,
        year: Option<u32>,
    ) -> Self {
        self.occupation = occupation.into();
        self.institution = institution.into();
        self.year = year;
        self
    }

    #[must_use]
    pub const fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_profile() {
        let json = r#"{
            "id": "665f1c",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "accountRole": "student",
            "isActive": true,
            "isVerified": false,
            "createdAt": "2024-01-05T10:00:00.000Z",
            "updatedAt": "2024-02-10T12:30:00Z",
            "phone": "01700000000",
            "address": "123 Main St",
            "occupation": "Student",
            "institution": "State University",
            "year": 4
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.name(), "Jane Doe");
        assert_eq!(profile.account_role(), "student");
        assert!(profile.is_active());
        assert!(!profile.is_verified());
        assert_eq!(profile.year(), Some(4));
        assert_eq!(
            profile.created_at().format("%Y-%m-%d").to_string(),
            "2024-01-05"
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "id": "1",
            "name": "Admin",
            "email": "admin@example.com",
            "accountRole": "admin",
            "isActive": true,
            "isVerified": true,
            "createdAt": "2024-01-05T10:00:00Z",
            "updatedAt": "2024-01-05T10:00:00Z"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert!(profile.phone().is_empty());
        assert_eq!(profile.year(), None);
    }

    #[test]
    fn test_null_contact_fields_are_empty() {
        let json = r#"{
            "id": "7",
            "name": "Sam Roe",
            "email": "sam@example.com",
            "accountRole": "student",
            "isActive": true,
            "isVerified": false,
            "createdAt": "2024-01-05T10:00:00Z",
            "updatedAt": "2024-01-05T10:00:00Z",
            "phone": null,
            "address": null,
            "occupation": null,
            "institution": null,
            "year": null
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.name(), "Sam Roe");
        assert!(profile.phone().is_empty());
        assert!(profile.address().is_empty());
        assert!(profile.occupation().is_empty());
        assert!(profile.institution().is_empty());
        assert_eq!(profile.year(), None);
    }
}
