//! Authentication middleware.

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::extractors::AuthContext;
use crate::api::state::AppState;
use crate::error::ErrorCode;
use crate::service::TokenType;

/// Extract bearer token from Authorization header.
fn extract_bearer_token(req: &Request<Body>) -> Option<String> {
    let auth_header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;

    auth_header
        .strip_prefix("Bearer ")
        .or_else(|| auth_header.strip_prefix("bearer "))
        .map(ToString::to_string)
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = Json(json!({
        "code": ErrorCode::UNAUTHORIZED.as_i32(),
        "message": message,
        "data": null
    }));

    (StatusCode::UNAUTHORIZED, body).into_response()
}

/// Create a forbidden response.
fn forbidden_response(message: &str) -> Response {
    let body = Json(json!({
        "code": ErrorCode::FORBIDDEN.as_i32(),
        "message": message,
        "data": null
    }));

    (StatusCode::FORBIDDEN, body).into_response()
}

/// Middleware that requires the admin service-account token.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer_token(&req) else {
        return unauthorized_response("Missing or invalid Authorization header");
    };

    let Some((token_type, _)) = state.token_service.validate(&token) else {
        return unauthorized_response("Invalid or expired token");
    };

    if token_type != TokenType::Admin {
        return forbidden_response("Admin token required");
    }

    req.extensions_mut()
        .insert(AuthContext::new(token_type, String::new()));

    next.run(req).await
}

/// Middleware that requires a valid session token (admin also accepted).
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer_token(&req) else {
        return unauthorized_response("Missing or invalid Authorization header");
    };

    let Some((token_type, jan_id)) = state.token_service.validate(&token) else {
        return unauthorized_response("Invalid or expired token");
    };

    req.extensions_mut()
        .insert(AuthContext::new(token_type, jan_id.unwrap_or_default()));

    next.run(req).await
}
