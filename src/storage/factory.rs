//! Storage backend factory.
//!
//! Creates the storage backend from configuration and verifies it is
//! healthy before the server starts serving requests.

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::error::AppError;
use crate::storage::file::FileStorage;
use crate::storage::traits::Storage;

/// Create a storage backend based on configuration.
///
/// # Errors
///
/// Returns an error if the storage backend cannot be initialized or fails
/// its health check.
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn Storage>, AppError> {
    let storage = FileStorage::new(&config.file).map_err(AppError::Storage)?;

    storage.health_check().await.map_err(AppError::Storage)?;

    Ok(Arc::new(storage))
}
