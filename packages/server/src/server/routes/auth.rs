//! Signup and token endpoints.
//!
//! Both verify in provider mode exclusively and fail closed: the legacy
//! fallback exists only for the generic current-user resolution, never for
//! the endpoints whose purpose is Firebase verification.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::debug;

use crate::common::ApiError;
use crate::domains::auth::data::{FirebaseSignupRequest, TokenResponse};
use crate::domains::auth::actions;
use crate::domains::user::data::UserResponse;
use crate::kernel::ProviderIdentity;
use crate::server::app::AppState;
use crate::server::middleware::bearer_token;

async fn verify_provider_token(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<ProviderIdentity, ApiError> {
    let token = bearer_token(headers).ok_or(ApiError::InvalidCredential)?;

    state
        .identity_provider
        .verify_id_token(token)
        .await
        .map_err(|err| {
            debug!(error = %err, "Firebase token verification failed");
            ApiError::InvalidCredential
        })
}

/// `POST /auth/firebase-signup` - create or update the account for a
/// verified Firebase identity.
pub async fn firebase_signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<FirebaseSignupRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let identity = verify_provider_token(&state, &headers).await?;
    let user = actions::firebase_signup(&state.db_pool, identity, request).await?;

    Ok(Json(user.into()))
}

/// `POST /auth/token` - issue a backend access token for a signed-up
/// Firebase identity.
pub async fn access_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, ApiError> {
    let identity = verify_provider_token(&state, &headers).await?;
    let token = actions::issue_access_token(&state.db_pool, &state.jwt_service, identity).await?;

    Ok(Json(token))
}
