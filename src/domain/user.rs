//! User profile records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserCategory;

/// A persisted account profile.
///
/// The JanID is the public identifier; the UUID is the internal record id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Internal record id.
    pub id: Uuid,

    /// Public JanID string, e.g. `JAN-C-2026-0042`.
    pub jan_id: String,

    /// Account category.
    pub category: UserCategory,

    /// Login email, unique across accounts.
    pub email: String,

    /// Display name shown on the public feed.
    pub display_name: String,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a new profile with a fresh record id.
    #[must_use]
    pub fn new(
        jan_id: String,
        category: UserCategory,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            jan_id,
            category,
            email: email.into(),
            display_name: display_name.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile() {
        let user = UserProfile::new(
            "JAN-C-2026-0001".to_string(),
            UserCategory::Citizen,
            "asha@example.in",
            "Asha",
        );
        assert_eq!(user.jan_id, "JAN-C-2026-0001");
        assert_eq!(user.category, UserCategory::Citizen);
        assert_eq!(user.email, "asha@example.in");
    }
}
