use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::json;

use crate::common::ApiError;
use crate::domains::user::actions;
use crate::domains::user::data::{UpdateUserRequest, UserResponse};
use crate::server::app::AppState;
use crate::server::middleware::CurrentUser;

/// `GET /users/me`
pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<UserResponse> {
    Json(user.into())
}

/// `PUT /users/me`
pub async fn update_me(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let updated = actions::update_profile(&state.db_pool, user.id, request).await?;
    Ok(Json(updated.into()))
}

/// `DELETE /users/me` - logical deletion
pub async fn delete_me(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<serde_json::Value>, ApiError> {
    actions::deactivate_account(&state.db_pool, user.id).await?;
    Ok(Json(json!({"message": "User account deleted successfully"})))
}

/// `GET /users/by-phone/{phone_number}`
pub async fn by_phone(
    State(state): State<AppState>,
    Extension(CurrentUser(_user)): Extension<CurrentUser>,
    Path(phone_number): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = actions::find_by_phone(&state.db_pool, &phone_number).await?;
    Ok(Json(user.into()))
}
