//! File-based user profile storage.
//!
//! One JSON document per account under `users/`, keyed by JanID. Email
//! lookups scan the directory, which is fine at the account counts a
//! single-node deployment sees.

use std::path::PathBuf;

use async_trait::async_trait;
use fs2::FileExt;
use tokio::sync::Mutex;

use crate::domain::UserProfile;
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::UserStore;

/// File-based user storage implementation.
pub struct FileUserStore {
    /// Directory for user profile files.
    users_dir: PathBuf,
    /// Mutex for coordinating file operations within this process.
    lock: Mutex<()>,
}

impl FileUserStore {
    /// Create a new file user storage.
    pub fn new(users_dir: PathBuf) -> Self {
        Self {
            users_dir,
            lock: Mutex::new(()),
        }
    }

    /// Get the file path for a profile.
    fn user_path(&self, jan_id: &str) -> PathBuf {
        self.users_dir
            .join(format!("{}.json", sanitize_name(jan_id)))
    }

    /// Write a profile with exclusive lock.
    fn write_locked(&self, user: &UserProfile) -> StorageResult<()> {
        let path = self.user_path(&user.jan_id);

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        file.lock_exclusive()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        serde_json::to_writer_pretty(&file, user)?;
        file.sync_all()?;
        file.unlock()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        Ok(())
    }

    /// Read a profile with exclusive lock.
    fn read_locked(&self, jan_id: &str) -> StorageResult<Option<UserProfile>> {
        let path = self.user_path(jan_id);

        if !path.exists() {
            return Ok(None);
        }

        let file = std::fs::File::open(&path)?;
        file.lock_exclusive()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        let user: UserProfile = serde_json::from_reader(&file)?;
        file.unlock()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        Ok(Some(user))
    }

    /// Read every profile in the directory.
    fn read_all(&self) -> StorageResult<Vec<UserProfile>> {
        let mut users = Vec::new();

        for entry in std::fs::read_dir(&self.users_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let file = std::fs::File::open(&path)?;
                let user: UserProfile = serde_json::from_reader(&file)?;
                users.push(user);
            }
        }

        Ok(users)
    }
}

#[async_trait]
impl UserStore for FileUserStore {
    async fn insert_user(&self, user: &UserProfile) -> StorageResult<()> {
        let _guard = self.lock.lock().await;
        self.write_locked(user)
    }

    async fn get_user(&self, jan_id: &str) -> StorageResult<Option<UserProfile>> {
        let _guard = self.lock.lock().await;
        self.read_locked(jan_id)
    }

    async fn find_user_by_email(&self, email: &str) -> StorageResult<Option<UserProfile>> {
        let _guard = self.lock.lock().await;
        Ok(self
            .read_all()?
            .into_iter()
            .find(|user| user.email.eq_ignore_ascii_case(email)))
    }

    async fn list_users(&self) -> StorageResult<Vec<UserProfile>> {
        let _guard = self.lock.lock().await;
        self.read_all()
    }
}

/// Sanitize a name for use as a filename.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
