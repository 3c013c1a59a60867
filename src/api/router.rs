//! Router setup and configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{admin, auth, health, users};
use crate::api::middleware::auth::{require_admin, require_session};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes (no auth required)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    // Public auth routes
    let auth_routes = Router::new().route("/signup", post(auth::signup));

    // Session routes (session token required)
    let session_routes = Router::new()
        .route("/me", get(users::me))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    // Admin routes (admin service-account token required)
    let admin_routes = Router::new()
        .route("/seed", post(admin::seed))
        .route("/users/{jan_id}", get(users::get_user))
        .layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(health_routes)
        .nest("/v1/auth", auth_routes)
        .nest("/v1/users", session_routes)
        .nest("/v1/admin", admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
