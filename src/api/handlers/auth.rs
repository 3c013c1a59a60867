//! Signup handler.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::{ApiResponse, SignupRequest, SignupResponse};
use crate::error::Result;

/// Register a new citizen account.
///
/// Allocates a citizen JanID and persists the profile. If allocation fails
/// the error propagates and no account is created.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<ApiResponse<SignupResponse>>> {
    let response = state.signup_service.signup(request).await?;

    Ok(Json(ApiResponse::success(response)))
}
