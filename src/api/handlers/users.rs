//! User lookup handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extractors::AuthContext;
use crate::api::state::AppState;
use crate::domain::{ApiResponse, UserResponse};
use crate::error::{AppError, Result};

/// Get the profile of the authenticated account.
pub async fn me(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<Json<ApiResponse<UserResponse>>> {
    if auth.is_admin() {
        // Admin tokens are service credentials, not accounts.
        return Err(AppError::BadRequest(
            "admin token has no account profile".to_string(),
        ));
    }

    let user = state
        .storage
        .get_user(&auth.jan_id)
        .await
        .map_err(AppError::Storage)?
        .ok_or_else(|| AppError::NotFound(auth.jan_id.clone()))?;

    Ok(Json(ApiResponse::success(user.into())))
}

/// Get a profile by JanID (admin only).
pub async fn get_user(
    State(state): State<AppState>,
    Path(jan_id): Path<String>,
) -> Result<Json<ApiResponse<UserResponse>>> {
    let user = state
        .storage
        .get_user(&jan_id)
        .await
        .map_err(AppError::Storage)?
        .ok_or_else(|| AppError::NotFound(jan_id))?;

    Ok(Json(ApiResponse::success(user.into())))
}
