//! Admin handlers.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::{ApiResponse, SeedResponse};
use crate::error::Result;

/// Seed the fixed set of demo admin accounts.
///
/// Idempotent: re-running reports previously created accounts as skipped.
pub async fn seed(State(state): State<AppState>) -> Result<Json<ApiResponse<SeedResponse>>> {
    let report = state.seed_service.run().await?;

    Ok(Json(ApiResponse::success(report)))
}
