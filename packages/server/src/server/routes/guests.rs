use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;

use crate::common::ApiError;
use crate::domains::guest::actions;
use crate::domains::guest::data::{
    CreateGuestRequest, GuestResponse, GuestStatistics, UpdateGuestRequest,
};
use crate::server::app::AppState;
use crate::server::middleware::CurrentUser;

#[derive(Debug, Deserialize)]
pub struct WeddingQuery {
    pub wedding_id: i64,
}

/// `POST /guests`
pub async fn add(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(request): Json<CreateGuestRequest>,
) -> Result<Json<GuestResponse>, ApiError> {
    let guest = actions::add(&state.db_pool, user.id, request).await?;
    Ok(Json(guest.into()))
}

/// `GET /guests?wedding_id=`
pub async fn list(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<WeddingQuery>,
) -> Result<Json<Vec<GuestResponse>>, ApiError> {
    let guests = actions::list(&state.db_pool, user.id, query.wedding_id).await?;
    Ok(Json(guests.into_iter().map(Into::into).collect()))
}

/// `PUT /guests/{id}`
pub async fn update(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(guest_id): Path<i64>,
    Json(request): Json<UpdateGuestRequest>,
) -> Result<Json<GuestResponse>, ApiError> {
    let guest = actions::update(&state.db_pool, guest_id, user.id, request).await?;
    Ok(Json(guest.into()))
}

/// `DELETE /guests/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(guest_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    actions::delete(&state.db_pool, guest_id, user.id).await?;
    Ok(Json(json!({"message": "Guest deleted successfully"})))
}

/// `POST /guests/{id}/send-invitation`
pub async fn send_invitation(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(guest_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    actions::send_invitation(&state.db_pool, guest_id, user.id).await?;
    Ok(Json(json!({"message": "Invitation sent successfully"})))
}

/// `GET /guests/statistics?wedding_id=`
pub async fn statistics(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<WeddingQuery>,
) -> Result<Json<GuestStatistics>, ApiError> {
    let stats = actions::statistics(&state.db_pool, user.id, query.wedding_id).await?;
    Ok(Json(stats))
}
