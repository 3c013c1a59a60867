//! Citizen signup service.

use std::sync::Arc;

use crate::domain::{SignupRequest, SignupResponse, UserCategory, UserProfile};
use crate::error::{AppError, Result};
use crate::service::allocator::JanIdAllocator;
use crate::service::token::TokenService;
use crate::storage::traits::Storage;

/// Service for registering citizen accounts.
pub struct SignupService {
    /// Storage backend.
    storage: Arc<dyn Storage>,
    /// JanID allocator.
    allocator: Arc<JanIdAllocator>,
    /// Token service for session issuance.
    tokens: Arc<TokenService>,
}

impl SignupService {
    /// Create a new signup service.
    pub fn new(
        storage: Arc<dyn Storage>,
        allocator: Arc<JanIdAllocator>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            storage,
            allocator,
            tokens,
        }
    }

    /// Register a new citizen account.
    ///
    /// Allocates a citizen JanID, persists the profile, and opens a session.
    /// The ID is allocated before the profile is written: if allocation
    /// fails, the whole signup aborts and no user record is created.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid, the email is already
    /// registered, ID allocation fails, or storage fails.
    pub async fn signup(&self, request: SignupRequest) -> Result<SignupResponse> {
        request.validate().map_err(AppError::BadRequest)?;

        if self
            .storage
            .find_user_by_email(&request.email)
            .await
            .map_err(AppError::Storage)?
            .is_some()
        {
            return Err(AppError::DuplicateAccount(request.email));
        }

        let jan_id = self.allocator.allocate(UserCategory::Citizen).await?;

        let user = UserProfile::new(
            jan_id.to_string(),
            UserCategory::Citizen,
            request.email,
            request.display_name.trim(),
        );
        self.storage
            .insert_user(&user)
            .await
            .map_err(AppError::Storage)?;

        tracing::info!(jan_id = %user.jan_id, "Citizen account created");

        let session = self.tokens.issue_session(&user.jan_id);

        Ok(SignupResponse {
            jan_id: user.jan_id,
            category: user.category,
            token: session.token,
            expires_at: session.expires_at.to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, FileStorageConfig};
    use crate::domain::CounterState;
    use crate::error::{StorageError, StorageResult};
    use crate::storage::file::FileStorage;
    use crate::storage::traits::{CounterStore, UserStore};
    use async_trait::async_trait;
    use chrono::Datelike;
    use tempfile::TempDir;

    fn create_test_service() -> (SignupService, Arc<FileStorage>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage_config = FileStorageConfig {
            data_dir: temp_dir.path().to_path_buf(),
        };
        let storage = Arc::new(FileStorage::new(&storage_config).unwrap());
        let allocator = Arc::new(JanIdAllocator::new(storage.clone()));
        let tokens = Arc::new(TokenService::new(&AuthConfig::default()));
        let service = SignupService::new(storage.clone(), allocator, tokens);
        (service, storage, temp_dir)
    }

    fn request(email: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            display_name: "Asha".to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_allocates_sequential_ids() {
        let (service, _storage, _temp) = create_test_service();
        let year = chrono::Utc::now().year();

        let first = service.signup(request("asha@example.in")).await.unwrap();
        assert_eq!(first.jan_id, format!("JAN-C-{year}-0001"));
        assert_eq!(first.category, UserCategory::Citizen);
        assert!(!first.token.is_empty());

        let second = service.signup(request("ravi@example.in")).await.unwrap();
        assert_eq!(second.jan_id, format!("JAN-C-{year}-0002"));
    }

    #[tokio::test]
    async fn test_signup_persists_profile() {
        let (service, storage, _temp) = create_test_service();

        let response = service.signup(request("asha@example.in")).await.unwrap();

        let user = storage.get_user(&response.jan_id).await.unwrap().unwrap();
        assert_eq!(user.email, "asha@example.in");
        assert_eq!(user.display_name, "Asha");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (service, _storage, _temp) = create_test_service();

        service.signup(request("asha@example.in")).await.unwrap();
        let result = service.signup(request("asha@example.in")).await;
        assert!(matches!(result, Err(AppError::DuplicateAccount(_))));
    }

    #[tokio::test]
    async fn test_invalid_request_rejected() {
        let (service, _storage, _temp) = create_test_service();

        let result = service.signup(request("no-at-sign")).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Storage where counter allocation always fails but user operations
    /// work, to verify that a failed allocation creates no user record.
    struct AllocationFailsStorage {
        inner: Arc<FileStorage>,
    }

    #[async_trait]
    impl CounterStore for AllocationFailsStorage {
        async fn allocate(&self, _category: UserCategory) -> StorageResult<u64> {
            Err(StorageError::Unavailable)
        }

        async fn current(&self, category: UserCategory) -> StorageResult<u64> {
            self.inner.current(category).await
        }

        async fn counter_state(
            &self,
            category: UserCategory,
        ) -> StorageResult<Option<CounterState>> {
            self.inner.counter_state(category).await
        }
    }

    #[async_trait]
    impl UserStore for AllocationFailsStorage {
        async fn insert_user(&self, user: &UserProfile) -> StorageResult<()> {
            self.inner.insert_user(user).await
        }

        async fn get_user(&self, jan_id: &str) -> StorageResult<Option<UserProfile>> {
            self.inner.get_user(jan_id).await
        }

        async fn find_user_by_email(&self, email: &str) -> StorageResult<Option<UserProfile>> {
            self.inner.find_user_by_email(email).await
        }

        async fn list_users(&self) -> StorageResult<Vec<UserProfile>> {
            self.inner.list_users().await
        }
    }

    #[async_trait]
    impl Storage for AllocationFailsStorage {
        async fn health_check(&self) -> StorageResult<()> {
            self.inner.health_check().await
        }

        fn backend_name(&self) -> &'static str {
            self.inner.backend_name()
        }
    }

    #[tokio::test]
    async fn test_failed_allocation_creates_no_user_record() {
        let temp_dir = TempDir::new().unwrap();
        let storage_config = FileStorageConfig {
            data_dir: temp_dir.path().to_path_buf(),
        };
        let inner = Arc::new(FileStorage::new(&storage_config).unwrap());
        let storage = Arc::new(AllocationFailsStorage {
            inner: inner.clone(),
        });
        let allocator = Arc::new(JanIdAllocator::new(storage.clone()));
        let tokens = Arc::new(TokenService::new(&AuthConfig::default()));
        let service = SignupService::new(storage, allocator, tokens);

        let result = service.signup(request("asha@example.in")).await;
        assert!(matches!(result, Err(AppError::Allocation(_))));

        assert!(inner.list_users().await.unwrap().is_empty());
    }
}
