//! Persistent counter state.

use serde::{Deserialize, Serialize};

use super::UserCategory;

/// Persistent state of a per-category counter record.
///
/// `count` is the number of allocations made so far; the next allocation
/// yields `count + 1`. The record is created implicitly on first allocation
/// and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterState {
    /// Category this counter belongs to.
    pub category: UserCategory,

    /// Last issued count (0 before the first allocation).
    pub count: u64,

    /// Mutation counter for diagnostics.
    pub version: u64,

    /// Last update timestamp (milliseconds since epoch).
    pub updated_at: i64,
}

impl CounterState {
    /// Fresh counter for a category with no allocations yet.
    #[must_use]
    pub fn new(category: UserCategory) -> Self {
        Self {
            category,
            count: 0,
            version: 0,
            updated_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_counter_starts_at_zero() {
        let state = CounterState::new(UserCategory::Citizen);
        assert_eq!(state.count, 0);
        assert_eq!(state.version, 0);
    }
}
