//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::{JanIdAllocator, SeedService, SignupService, TokenService};
use crate::storage::traits::Storage;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Storage backend.
    pub storage: Arc<dyn Storage>,
    /// JanID allocator.
    pub allocator: Arc<JanIdAllocator>,
    /// Signup service.
    pub signup_service: Arc<SignupService>,
    /// Seed service.
    pub seed_service: Arc<SeedService>,
    /// Token service.
    pub token_service: Arc<TokenService>,
    /// Prometheus metrics handle.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        config: Arc<AppConfig>,
        storage: Arc<dyn Storage>,
        metrics: PrometheusHandle,
    ) -> Self {
        let allocator = Arc::new(JanIdAllocator::new(Arc::clone(&storage)));
        let token_service = Arc::new(TokenService::new(&config.auth));

        let signup_service = Arc::new(SignupService::new(
            Arc::clone(&storage),
            Arc::clone(&allocator),
            Arc::clone(&token_service),
        ));

        let seed_service = Arc::new(SeedService::new(
            Arc::clone(&storage),
            Arc::clone(&allocator),
        ));

        Self {
            config,
            storage,
            allocator,
            signup_service,
            seed_service,
            token_service,
            metrics,
        }
    }
}
