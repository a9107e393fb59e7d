use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::common::ApiError;
use crate::domains::auth::verifier::resolve_current_user;
use crate::domains::user::models::User;
use crate::server::app::AppState;

/// Authenticated user attached to request extensions by [`require_auth`].
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Extract the bearer token (handles both "Bearer <token>" and raw token)
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    Some(value.strip_prefix("Bearer ").unwrap_or(value))
}

/// Authentication middleware for protected routes.
///
/// Resolves the bearer token through the dual-mode verifier and rejects the
/// request with 401 unless it maps to an active user.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())
        .ok_or(ApiError::InvalidCredential)?
        .to_string();

    let user = resolve_current_user(
        &state.db_pool,
        state.identity_provider.as_ref(),
        &state.jwt_service,
        &token,
    )
    .await?;

    debug!(user_id = user.id, "authenticated user");
    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}
