//! Demo admin seeding.
//!
//! Creates the fixed set of demo administrator accounts directly through
//! the storage layer under the admin service credential. No interactive
//! session is signed out or restored: the routine runs server-side and
//! touches nothing but the counter and user records it creates.

use std::sync::Arc;

use crate::domain::{SeedResponse, SeededAccount, UserCategory, UserProfile};
use crate::error::{AppError, Result};
use crate::service::allocator::JanIdAllocator;
use crate::storage::traits::Storage;

/// Fixed set of demo accounts created on first seed.
const DEMO_ACCOUNTS: &[(&str, &str, UserCategory)] = &[
    ("admin.ward1@jansetu.gov.in", "Ward 1 Admin", UserCategory::Admin),
    ("admin.ward2@jansetu.gov.in", "Ward 2 Admin", UserCategory::Admin),
    ("admin.ward3@jansetu.gov.in", "Ward 3 Admin", UserCategory::Admin),
    (
        "superadmin@jansetu.gov.in",
        "Super Admin",
        UserCategory::SuperAdmin,
    ),
];

/// Service that seeds the demo admin accounts.
pub struct SeedService {
    /// Storage backend.
    storage: Arc<dyn Storage>,
    /// JanID allocator.
    allocator: Arc<JanIdAllocator>,
}

impl SeedService {
    /// Create a new seed service.
    pub fn new(storage: Arc<dyn Storage>, allocator: Arc<JanIdAllocator>) -> Self {
        Self { storage, allocator }
    }

    /// Create any demo accounts that do not exist yet.
    ///
    /// Idempotent: accounts already present (by email) are skipped, so
    /// re-running the seed never double-allocates IDs or duplicates
    /// accounts. An allocation failure aborts the run; accounts created
    /// before the failure remain (each account is created atomically).
    ///
    /// # Errors
    ///
    /// Returns an error if ID allocation or storage fails.
    pub async fn run(&self) -> Result<SeedResponse> {
        let mut accounts = Vec::with_capacity(DEMO_ACCOUNTS.len());
        let mut created = 0;
        let mut skipped = 0;

        for &(email, display_name, category) in DEMO_ACCOUNTS {
            if let Some(existing) = self
                .storage
                .find_user_by_email(email)
                .await
                .map_err(AppError::Storage)?
            {
                skipped += 1;
                accounts.push(SeededAccount {
                    email: email.to_string(),
                    jan_id: existing.jan_id,
                    created: false,
                });
                continue;
            }

            let jan_id = self.allocator.allocate(category).await?;
            let user = UserProfile::new(jan_id.to_string(), category, email, display_name);
            self.storage
                .insert_user(&user)
                .await
                .map_err(AppError::Storage)?;

            tracing::info!(jan_id = %user.jan_id, category = %category, "Seeded demo account");

            created += 1;
            accounts.push(SeededAccount {
                email: email.to_string(),
                jan_id: user.jan_id,
                created: true,
            });
        }

        Ok(SeedResponse {
            created,
            skipped,
            accounts,
        })
    }
}
