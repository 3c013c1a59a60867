//! File-based storage backend.
//!
//! This backend stores data as JSON files with file locking for atomic
//! operations. Suitable for development and single-node deployments; the
//! trait seam in [`crate::storage::traits`] is where a managed document
//! store would plug in.
//!
//! Directory structure:
//! ```text
//! data/
//! ├── counters/
//! │   └── {category}_counter.json
//! └── users/
//!     └── {jan_id}.json
//! ```

mod counter;
mod user;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::FileStorageConfig;
use crate::domain::{CounterState, UserCategory, UserProfile};
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::{CounterStore, Storage, UserStore};

pub use counter::FileCounterStore;
pub use user::FileUserStore;

/// File-based storage implementation.
pub struct FileStorage {
    /// Base data directory.
    base_dir: PathBuf,
    /// Counter storage.
    counter_store: FileCounterStore,
    /// User profile storage.
    user_store: FileUserStore,
}

impl FileStorage {
    /// Create a new file storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directories cannot be created.
    pub fn new(config: &FileStorageConfig) -> StorageResult<Self> {
        let base_dir = config.data_dir.clone();

        Self::ensure_directories(&base_dir)?;

        Ok(Self {
            counter_store: FileCounterStore::new(base_dir.join("counters")),
            user_store: FileUserStore::new(base_dir.join("users")),
            base_dir,
        })
    }

    /// Ensure all required directories exist.
    fn ensure_directories(base_dir: &PathBuf) -> StorageResult<()> {
        let dirs = [
            base_dir.clone(),
            base_dir.join("counters"),
            base_dir.join("users"),
        ];

        for dir in &dirs {
            std::fs::create_dir_all(dir).map_err(|e| {
                StorageError::FileIO(format!("Failed to create directory {dir:?}: {e}"))
            })?;
        }

        Ok(())
    }
}

#[async_trait]
impl CounterStore for FileStorage {
    async fn allocate(&self, category: UserCategory) -> StorageResult<u64> {
        self.counter_store.allocate(category).await
    }

    async fn current(&self, category: UserCategory) -> StorageResult<u64> {
        self.counter_store.current(category).await
    }

    async fn counter_state(&self, category: UserCategory) -> StorageResult<Option<CounterState>> {
        self.counter_store.counter_state(category).await
    }
}

#[async_trait]
impl UserStore for FileStorage {
    async fn insert_user(&self, user: &UserProfile) -> StorageResult<()> {
        self.user_store.insert_user(user).await
    }

    async fn get_user(&self, jan_id: &str) -> StorageResult<Option<UserProfile>> {
        self.user_store.get_user(jan_id).await
    }

    async fn find_user_by_email(&self, email: &str) -> StorageResult<Option<UserProfile>> {
        self.user_store.find_user_by_email(email).await
    }

    async fn list_users(&self) -> StorageResult<Vec<UserProfile>> {
        self.user_store.list_users().await
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn health_check(&self) -> StorageResult<()> {
        if !self.base_dir.exists() {
            return Err(StorageError::Unavailable);
        }

        // Try to create a test file
        let test_file = self.base_dir.join(".health_check");
        tokio::fs::write(&test_file, b"ok")
            .await
            .map_err(|e| StorageError::FileIO(format!("Health check failed: {e}")))?;
        tokio::fs::remove_file(&test_file)
            .await
            .map_err(|e| StorageError::FileIO(format!("Health check cleanup failed: {e}")))?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
