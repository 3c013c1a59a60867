//! File-based counter storage.
//!
//! One JSON document per category under `counters/`, mutated under an
//! exclusive `flock`. The file lock serializes writers across processes;
//! the tokio mutex serializes tasks within this process so the blocking
//! lock is never contended from two tasks at once.

use std::io::{Seek, SeekFrom, Write};
use std::path::PathBuf;

use async_trait::async_trait;
use fs2::FileExt;
use tokio::sync::Mutex;

use crate::domain::{CounterState, UserCategory};
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::CounterStore;

/// File-based counter storage implementation.
pub struct FileCounterStore {
    /// Directory for counter files.
    counters_dir: PathBuf,
    /// Mutex for coordinating file operations within this process.
    lock: Mutex<()>,
}

impl FileCounterStore {
    /// Create a new file counter storage.
    pub fn new(counters_dir: PathBuf) -> Self {
        Self {
            counters_dir,
            lock: Mutex::new(()),
        }
    }

    /// Get the file path for a category's counter record.
    fn counter_path(&self, category: UserCategory) -> PathBuf {
        self.counters_dir
            .join(format!("{}.json", category.counter_key()))
    }

    /// Read counter state from file with exclusive lock.
    fn read_state_locked(&self, category: UserCategory) -> StorageResult<Option<CounterState>> {
        let path = self.counter_path(category);

        if !path.exists() {
            return Ok(None);
        }

        let file = std::fs::File::open(&path)?;
        file.lock_exclusive()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        let state: CounterState = serde_json::from_reader(&file)?;
        file.unlock()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        Ok(Some(state))
    }

    /// Atomically read, increment, and write back the counter record.
    ///
    /// Opens with `create(true)` so the record comes into existence on the
    /// first allocation; an empty file is read as a fresh counter at 0.
    /// The whole read-modify-write happens while holding the exclusive
    /// lock, and the new state is fsynced before the lock is released.
    fn increment_locked(&self, category: UserCategory) -> StorageResult<u64> {
        let path = self.counter_path(category);

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        file.lock_exclusive()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        let result = Self::increment_within_lock(&mut file, category);

        // Release the lock even if the update failed.
        file.unlock()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        result
    }

    fn increment_within_lock(
        file: &mut std::fs::File,
        category: UserCategory,
    ) -> StorageResult<u64> {
        let len = file.metadata()?.len();
        let mut state = if len == 0 {
            CounterState::new(category)
        } else {
            serde_json::from_reader(&*file)?
        };

        state.count += 1;
        state.version += 1;
        state.updated_at = chrono::Utc::now().timestamp_millis();

        file.seek(SeekFrom::Start(0))?;
        file.set_len(0)?;
        let json = serde_json::to_string_pretty(&state)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        Ok(state.count)
    }
}

#[async_trait]
impl CounterStore for FileCounterStore {
    async fn allocate(&self, category: UserCategory) -> StorageResult<u64> {
        let _guard = self.lock.lock().await;
        self.increment_locked(category)
    }

    async fn current(&self, category: UserCategory) -> StorageResult<u64> {
        let _guard = self.lock.lock().await;
        Ok(self
            .read_state_locked(category)?
            .map_or(0, |state| state.count))
    }

    async fn counter_state(&self, category: UserCategory) -> StorageResult<Option<CounterState>> {
        let _guard = self.lock.lock().await;
        self.read_state_locked(category)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileCounterStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCounterStore::new(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_cold_start_yields_one() {
        let (store, _temp) = create_test_store();

        assert_eq!(store.current(UserCategory::Citizen).await.unwrap(), 0);
        assert_eq!(store.allocate(UserCategory::Citizen).await.unwrap(), 1);
        assert_eq!(store.current(UserCategory::Citizen).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sequential_allocations_are_monotonic() {
        let (store, _temp) = create_test_store();

        let mut last = 0;
        for _ in 0..10 {
            let count = store.allocate(UserCategory::Admin).await.unwrap();
            assert!(count > last);
            last = count;
        }
        assert_eq!(last, 10);
    }

    #[tokio::test]
    async fn test_categories_use_disjoint_counters() {
        let (store, _temp) = create_test_store();

        store.allocate(UserCategory::Citizen).await.unwrap();
        store.allocate(UserCategory::Citizen).await.unwrap();
        assert_eq!(store.allocate(UserCategory::Admin).await.unwrap(), 1);
        assert_eq!(store.allocate(UserCategory::SuperAdmin).await.unwrap(), 1);
        assert_eq!(store.current(UserCategory::Citizen).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_allocations_have_no_duplicates_or_gaps() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(FileCounterStore::new(temp_dir.path().to_path_buf()));

        let k = 32;
        let mut handles = Vec::with_capacity(k);
        for _ in 0..k {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.allocate(UserCategory::Citizen).await.unwrap()
            }));
        }

        let mut issued = BTreeSet::new();
        for handle in handles {
            let count = handle.await.unwrap();
            assert!(issued.insert(count), "count {count} issued twice");
        }

        let expected: BTreeSet<u64> = (1..=k as u64).collect();
        assert_eq!(issued, expected);
    }

    #[tokio::test]
    async fn test_state_tracks_versions() {
        let (store, _temp) = create_test_store();

        store.allocate(UserCategory::Citizen).await.unwrap();
        store.allocate(UserCategory::Citizen).await.unwrap();

        let state = store
            .counter_state(UserCategory::Citizen)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(state.count, 2);
        assert_eq!(state.version, 2);
        assert_eq!(state.category, UserCategory::Citizen);
    }
}
