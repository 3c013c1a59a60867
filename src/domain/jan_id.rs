//! JanID formatting.
//!
//! A JanID is the human-readable public identifier of an account:
//! `JAN-{categoryCode}-{year}-{paddedCount}`, e.g. `JAN-C-2026-0042`.

use chrono::{DateTime, Datelike, Utc};

use super::UserCategory;

/// Year literal embedded in every super-admin JanID.
///
/// Super-admin IDs carry this fixed year regardless of wall-clock time,
/// matching the behavior of all previously issued IDs. Changing it would
/// break the ID scheme for existing accounts.
pub const SUPER_ADMIN_YEAR: i32 = 2005;

/// A JanID, computed per allocation and never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JanId {
    /// Account category the ID was issued for.
    pub category: UserCategory,
    /// Calendar year embedded in the ID.
    pub year: i32,
    /// Counter value, strictly increasing per category.
    pub count: u64,
}

impl JanId {
    /// Build a JanID for an allocation made at `issued_at`.
    ///
    /// Citizens and admins embed the issue year; super-admins embed the
    /// fixed [`SUPER_ADMIN_YEAR`] literal.
    #[must_use]
    pub fn issued(category: UserCategory, count: u64, issued_at: DateTime<Utc>) -> Self {
        let year = match category {
            UserCategory::SuperAdmin => SUPER_ADMIN_YEAR,
            UserCategory::Citizen | UserCategory::Admin => issued_at.year(),
        };
        Self {
            category,
            year,
            count,
        }
    }
}

impl std::fmt::Display for JanId {
    /// Counts are zero-padded to 4 digits. There is no upper bound: a count
    /// of 10000 widens the field to 5 characters rather than truncating.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "JAN-{}-{}-{:04}",
            self.category.code(),
            self.year,
            self.count
        )
    }
}
