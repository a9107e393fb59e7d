use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::json;

use crate::common::ApiError;
use crate::domains::wedding::actions;
use crate::domains::wedding::data::{CreateWeddingRequest, UpdateWeddingRequest, WeddingResponse};
use crate::server::app::AppState;
use crate::server::middleware::CurrentUser;

/// `POST /weddings`
pub async fn create(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(request): Json<CreateWeddingRequest>,
) -> Result<Json<WeddingResponse>, ApiError> {
    let wedding = actions::create(&state.db_pool, user.id, request).await?;
    Ok(Json(wedding.into()))
}

/// `GET /weddings`
pub async fn list(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<WeddingResponse>>, ApiError> {
    let weddings = actions::list(&state.db_pool, user.id).await?;
    Ok(Json(weddings.into_iter().map(Into::into).collect()))
}

/// `GET /weddings/{id}`
pub async fn get(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(wedding_id): Path<i64>,
) -> Result<Json<WeddingResponse>, ApiError> {
    let wedding = actions::get(&state.db_pool, wedding_id, user.id).await?;
    Ok(Json(wedding.into()))
}

/// `PUT /weddings/{id}`
pub async fn update(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(wedding_id): Path<i64>,
    Json(request): Json<UpdateWeddingRequest>,
) -> Result<Json<WeddingResponse>, ApiError> {
    let wedding = actions::update(&state.db_pool, wedding_id, user.id, request).await?;
    Ok(Json(wedding.into()))
}

/// `DELETE /weddings/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(wedding_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    actions::delete(&state.db_pool, wedding_id, user.id).await?;
    Ok(Json(json!({"message": "Wedding deleted successfully"})))
}
