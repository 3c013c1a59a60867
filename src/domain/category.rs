//! Account categories.

use serde::{Deserialize, Serialize};

/// Category of a JanSetu account.
///
/// Each category owns an independent counter record; allocations for
/// different categories never contend with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserCategory {
    /// Regular citizen account (self-service signup).
    Citizen,
    /// Ward administrator account (created by seeding).
    Admin,
    /// Super administrator account (created by seeding).
    SuperAdmin,
}

impl UserCategory {
    /// All categories, in counter-record order.
    pub const ALL: [Self; 3] = [Self::Citizen, Self::Admin, Self::SuperAdmin];

    /// Single-letter code used in the JanID string.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Citizen => 'C',
            Self::Admin => 'A',
            Self::SuperAdmin => 'K',
        }
    }

    /// Stable snake_case name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Document id of this category's counter record in the counters
    /// collection.
    #[must_use]
    pub fn counter_key(self) -> String {
        format!("{}_counter", self.as_str())
    }
}

impl std::fmt::Display for UserCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
