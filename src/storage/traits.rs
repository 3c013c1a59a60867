//! Storage trait definitions.
//!
//! These traits define the interface for storage backends, enabling swapping
//! between different implementations without changing business logic. The
//! counter contract in particular is what the allocator's uniqueness
//! guarantee rests on.

use async_trait::async_trait;

use crate::domain::{CounterState, UserCategory, UserProfile};
use crate::error::StorageResult;

/// Counter storage operations.
///
/// Provides the atomic read-increment-write primitive the JanID allocator
/// is built on.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically increment the category's counter and return the new count.
    ///
    /// A missing counter record is treated as count 0, so the first
    /// allocation for a category yields 1. The read-modify-write must be
    /// atomic with respect to all other callers of this method: for any set
    /// of concurrent allocations against the same category, the returned
    /// counts form a contiguous run with no duplicates and no gaps.
    ///
    /// Exactly one counter record is mutated per successful call.
    async fn allocate(&self, category: UserCategory) -> StorageResult<u64>;

    /// Get the current count without incrementing (0 if no record exists).
    async fn current(&self, category: UserCategory) -> StorageResult<u64>;

    /// Get the full counter state, if the record exists.
    async fn counter_state(&self, category: UserCategory) -> StorageResult<Option<CounterState>>;
}

/// User profile storage operations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user profile.
    async fn insert_user(&self, user: &UserProfile) -> StorageResult<()>;

    /// Look up a profile by its public JanID.
    async fn get_user(&self, jan_id: &str) -> StorageResult<Option<UserProfile>>;

    /// Look up a profile by login email.
    async fn find_user_by_email(&self, email: &str) -> StorageResult<Option<UserProfile>>;

    /// List all stored profiles.
    async fn list_users(&self) -> StorageResult<Vec<UserProfile>>;
}

/// Combined storage trait for all storage operations.
#[async_trait]
pub trait Storage: CounterStore + UserStore {
    /// Check if the storage backend is healthy and reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Get the storage backend name.
    fn backend_name(&self) -> &'static str;
}
