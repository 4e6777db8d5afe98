//! Display-ready profile.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::domain::entities::UserProfile;

/// Date format used when the configured one is invalid.
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// Profile fields formatted for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: String,
    /// `Active` or `Inactive`.
    pub status: &'static str,
    pub is_active: bool,
    /// `Yes` or `Not Verified`.
    pub verified: &'static str,
    pub is_verified: bool,
    pub occupation: String,
    pub institution: String,
    /// Empty when the profile has no year.
    pub year: String,
    pub joined: String,
    pub updated: String,
}

impl ProfileView {
    /// Formats a profile using a chrono date format.
    #[must_use]
    pub fn from_profile(profile: &UserProfile, date_format: &str) -> Self {
        Self {
            name: profile.name().to_string(),
            email: profile.email().to_string(),
            phone: profile.phone().to_string(),
            address: profile.address().to_string(),
            role: profile.account_role().to_string(),
            status: if profile.is_active() { "Active" } else { "Inactive" },
            is_active: profile.is_active(),
            verified: if profile.is_verified() {
                "Yes"
            } else {
                "Not Verified"
            },
            is_verified: profile.is_verified(),
            occupation: profile.occupation().to_string(),
            institution: profile.institution().to_string(),
            year: profile.year().map(|y| y.to_string()).unwrap_or_default(),
            joined: format_date(profile.created_at(), date_format),
            updated: format_date(profile.updated_at(), date_format),
        }
    }
}

/// Formats a UTC timestamp, falling back to [`DEFAULT_DATE_FORMAT`] on a bad format string.
#[must_use]
pub fn format_date(date: DateTime<Utc>, format: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    date.format_with_items(items.iter()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile() -> UserProfile {
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
        UserProfile::new("42", "Jane Doe", "jane@example.com", "student", created)
            .with_flags(true, false)
            .with_contact("01700000000", "123 Main St")
            .with_affiliation("Student", "State University", Some(4))
            .with_updated_at(Utc.with_ymd_and_hms(2024, 11, 23, 8, 0, 0).unwrap())
    }

    #[test]
    fn test_view_formats_dates_and_flags() {
        let view = ProfileView::from_profile(&profile(), DEFAULT_DATE_FORMAT);

        assert_eq!(view.joined, "January 5, 2024");
        assert_eq!(view.updated, "November 23, 2024");
        assert_eq!(view.status, "Active");
        assert_eq!(view.verified, "Not Verified");
        assert_eq!(view.year, "4");
    }

    #[test]
    fn test_missing_year_is_blank() {
        let profile = profile().with_affiliation("Engineer", "Acme", None);

        assert_eq!(ProfileView::from_profile(&profile, "%Y").year, "");
    }

    #[test]
    fn test_invalid_format_falls_back() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();

        assert_eq!(format_date(date, "%Y-%m-%d"), "2024-01-05");
        assert_eq!(format_date(date, "%Q"), "January 5, 2024");
    }
}
