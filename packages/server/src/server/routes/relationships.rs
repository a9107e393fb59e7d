use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::json;

use crate::common::ApiError;
use crate::domains::relationship::actions;
use crate::domains::relationship::data::{
    CreateRelationshipRequest, RelationshipResponse, RespondRequest, UpdateRelationshipRequest,
};
use crate::server::app::AppState;
use crate::server::middleware::CurrentUser;

/// `POST /relationships` - request a new family link
pub async fn create(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(request): Json<CreateRelationshipRequest>,
) -> Result<Json<RelationshipResponse>, ApiError> {
    let edge = actions::create(&state.db_pool, user.id, request).await?;
    Ok(Json(edge.into()))
}

/// `GET /relationships` - edges requested by the current user
pub async fn list(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<RelationshipResponse>>, ApiError> {
    let edges = actions::list_for_user(&state.db_pool, user.id).await?;
    Ok(Json(edges.into_iter().map(Into::into).collect()))
}

/// `GET /relationships/pending` - actionable requests addressed to the user
pub async fn pending(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<RelationshipResponse>>, ApiError> {
    let edges = actions::list_pending(&state.db_pool, user.id).await?;
    Ok(Json(edges.into_iter().map(Into::into).collect()))
}

/// `POST /relationships/{id}/respond` - accept or reject a pending request
pub async fn respond(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(relationship_id): Path<i64>,
    Json(request): Json<RespondRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    actions::respond(&state.db_pool, relationship_id, user.id, request.accept).await?;
    Ok(Json(
        json!({"message": "Relationship request processed successfully"}),
    ))
}

/// `PUT /relationships/{id}` - requester-side edit
pub async fn update(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(relationship_id): Path<i64>,
    Json(request): Json<UpdateRelationshipRequest>,
) -> Result<Json<RelationshipResponse>, ApiError> {
    let edge = actions::update(&state.db_pool, relationship_id, user.id, request).await?;
    Ok(Json(edge.into()))
}

/// `DELETE /relationships/{id}` - requester-side delete
pub async fn delete(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(relationship_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    actions::delete(&state.db_pool, relationship_id, user.id).await?;
    Ok(Json(json!({"message": "Relationship deleted successfully"})))
}
