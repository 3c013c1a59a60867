//! JanID allocation service.
//!
//! Wraps the storage layer's atomic counter primitive and formats the
//! allocated count into a JanID. The uniqueness guarantee lives entirely in
//! [`crate::storage::traits::CounterStore::allocate`]: this service holds no
//! locks and performs no retries of its own.

use std::sync::Arc;

use chrono::Utc;
use metrics::counter;

use crate::domain::{JanId, UserCategory};
use crate::error::{AppError, Result};
use crate::storage::traits::Storage;

/// Service for allocating JanIDs.
pub struct JanIdAllocator {
    /// Storage backend.
    storage: Arc<dyn Storage>,
}

impl JanIdAllocator {
    /// Create a new allocator.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Allocate the next JanID for a category.
    ///
    /// Atomically increments the category's counter and formats the new
    /// count. Concurrent calls for the same category are serialized by the
    /// storage layer; calls for different categories touch disjoint counter
    /// records and proceed independently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Allocation`] if the counter mutation cannot
    /// commit. The caller must abort the enclosing account-creation flow:
    /// no ID string is ever fabricated on failure.
    pub async fn allocate(&self, category: UserCategory) -> Result<JanId> {
        let count = self
            .storage
            .allocate(category)
            .await
            .map_err(AppError::Allocation)?;

        counter!("jansetu_janid_allocated_total", "category" => category.as_str()).increment(1);
        tracing::debug!(category = %category, count, "Allocated JanID");

        Ok(JanId::issued(category, count, Utc::now()))
    }

    /// Current count for a category without allocating.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn current(&self, category: UserCategory) -> Result<u64> {
        self.storage
            .current(category)
            .await
            .map_err(AppError::Storage)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::config::FileStorageConfig;
    use crate::domain::CounterState;
    use crate::error::{StorageError, StorageResult};
    use crate::storage::file::FileStorage;
    use crate::storage::traits::{CounterStore, UserStore};
    use async_trait::async_trait;
    use chrono::Datelike;
    use tempfile::TempDir;

    fn create_test_allocator() -> (JanIdAllocator, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage_config = FileStorageConfig {
            data_dir: temp_dir.path().to_path_buf(),
        };
        let storage = Arc::new(FileStorage::new(&storage_config).unwrap());
        (JanIdAllocator::new(storage), temp_dir)
    }

    #[tokio::test]
    async fn test_fresh_citizen_ids() {
        let (allocator, _temp) = create_test_allocator();
        let year = Utc::now().year();

        let first = allocator.allocate(UserCategory::Citizen).await.unwrap();
        assert_eq!(first.to_string(), format!("JAN-C-{year}-0001"));

        let second = allocator.allocate(UserCategory::Citizen).await.unwrap();
        assert_eq!(second.to_string(), format!("JAN-C-{year}-0002"));
    }

    #[tokio::test]
    async fn test_super_admin_fixed_year() {
        let (allocator, _temp) = create_test_allocator();

        let id = allocator.allocate(UserCategory::SuperAdmin).await.unwrap();
        assert_eq!(id.to_string(), "JAN-K-2005-0001");
        assert!(id.to_string().contains("2005"));
    }

    #[tokio::test]
    async fn test_monotonic_counts() {
        let (allocator, _temp) = create_test_allocator();

        let mut last = 0;
        for _ in 0..5 {
            let id = allocator.allocate(UserCategory::Admin).await.unwrap();
            assert!(id.count > last);
            last = id.count;
        }
    }

    #[tokio::test]
    async fn test_concurrent_allocations_are_unique() {
        let temp_dir = TempDir::new().unwrap();
        let storage_config = FileStorageConfig {
            data_dir: temp_dir.path().to_path_buf(),
        };
        let storage = Arc::new(FileStorage::new(&storage_config).unwrap());
        let allocator = Arc::new(JanIdAllocator::new(storage));

        let k = 20;
        let mut handles = Vec::with_capacity(k);
        for _ in 0..k {
            let allocator = Arc::clone(&allocator);
            handles.push(tokio::spawn(async move {
                allocator
                    .allocate(UserCategory::Citizen)
                    .await
                    .unwrap()
                    .count
            }));
        }

        let mut counts = BTreeSet::new();
        for handle in handles {
            assert!(counts.insert(handle.await.unwrap()));
        }
        assert_eq!(counts, (1..=k as u64).collect::<BTreeSet<u64>>());
    }

    /// Storage double whose counter primitive never commits.
    struct FailingStorage;

    #[async_trait]
    impl CounterStore for FailingStorage {
        async fn allocate(&self, _category: UserCategory) -> StorageResult<u64> {
            Err(StorageError::Unavailable)
        }

        async fn current(&self, _category: UserCategory) -> StorageResult<u64> {
            Err(StorageError::Unavailable)
        }

        async fn counter_state(
            &self,
            _category: UserCategory,
        ) -> StorageResult<Option<CounterState>> {
            Err(StorageError::Unavailable)
        }
    }

    #[async_trait]
    impl UserStore for FailingStorage {
        async fn insert_user(&self, _user: &crate::domain::UserProfile) -> StorageResult<()> {
            Err(StorageError::Unavailable)
        }

        async fn get_user(
            &self,
            _jan_id: &str,
        ) -> StorageResult<Option<crate::domain::UserProfile>> {
            Err(StorageError::Unavailable)
        }

        async fn find_user_by_email(
            &self,
            _email: &str,
        ) -> StorageResult<Option<crate::domain::UserProfile>> {
            Err(StorageError::Unavailable)
        }

        async fn list_users(&self) -> StorageResult<Vec<crate::domain::UserProfile>> {
            Err(StorageError::Unavailable)
        }
    }

    #[async_trait]
    impl Storage for FailingStorage {
        async fn health_check(&self) -> StorageResult<()> {
            Err(StorageError::Unavailable)
        }

        fn backend_name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_allocation_failure_propagates() {
        let allocator = JanIdAllocator::new(Arc::new(FailingStorage));

        let result = allocator.allocate(UserCategory::Citizen).await;
        assert!(matches!(result, Err(AppError::Allocation(_))));
    }
}
