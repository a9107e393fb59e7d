use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::json;

use crate::common::ApiError;
use crate::domains::cart::actions;
use crate::domains::cart::data::{
    CartItemResponse, CartSummary, CreateCartItemRequest, UpdateCartItemRequest,
};
use crate::server::app::AppState;
use crate::server::middleware::CurrentUser;

/// `POST /cart`
pub async fn add(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(request): Json<CreateCartItemRequest>,
) -> Result<Json<CartItemResponse>, ApiError> {
    let item = actions::add(&state.db_pool, user.id, request).await?;
    Ok(Json(item.into()))
}

/// `GET /cart`
pub async fn list(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<CartItemResponse>>, ApiError> {
    let items = actions::list(&state.db_pool, user.id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// `PUT /cart/{id}`
pub async fn update(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(item_id): Path<i64>,
    Json(request): Json<UpdateCartItemRequest>,
) -> Result<Json<CartItemResponse>, ApiError> {
    let item = actions::update(&state.db_pool, item_id, user.id, request).await?;
    Ok(Json(item.into()))
}

/// `DELETE /cart/{id}`
pub async fn remove(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(item_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    actions::remove(&state.db_pool, item_id, user.id).await?;
    Ok(Json(json!({"message": "Item removed from cart"})))
}

/// `GET /cart/summary`
pub async fn summary(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<CartSummary>, ApiError> {
    let summary = actions::summary(&state.db_pool, user.id).await?;
    Ok(Json(summary))
}
