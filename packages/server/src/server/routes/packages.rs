use axum::extract::{Path, State};
use axum::Json;

use crate::common::ApiError;
use crate::domains::package::data::PackageResponse;
use crate::domains::package::models::Package;
use crate::server::app::AppState;

/// `GET /packages`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PackageResponse>>, ApiError> {
    let packages = Package::find_active(&state.db_pool).await?;
    Ok(Json(packages.into_iter().map(Into::into).collect()))
}

/// `GET /packages/popular`
pub async fn popular(
    State(state): State<AppState>,
) -> Result<Json<Vec<PackageResponse>>, ApiError> {
    let packages = Package::find_popular(&state.db_pool).await?;
    Ok(Json(packages.into_iter().map(Into::into).collect()))
}

/// `GET /packages/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(package_id): Path<i64>,
) -> Result<Json<PackageResponse>, ApiError> {
    let package = Package::find_by_id(package_id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Package"))?;

    Ok(Json(package.into()))
}
