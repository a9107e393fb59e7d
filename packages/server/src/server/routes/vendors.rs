use axum::extract::{Path, Query, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::common::ApiError;
use crate::domains::vendor::data::VendorResponse;
use crate::domains::vendor::models::{Vendor, VendorFilter};
use crate::server::app::AppState;

fn default_limit() -> i64 {
    50
}

#[derive(Debug, Deserialize)]
pub struct VendorListQuery {
    pub category: Option<String>,
    pub locality: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_featured_limit() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
pub struct FeaturedQuery {
    #[serde(default = "default_featured_limit")]
    pub limit: i64,
}

/// `GET /vendors` - catalogue listing with optional filters
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<VendorListQuery>,
) -> Result<Json<Vec<VendorResponse>>, ApiError> {
    let filter = VendorFilter {
        category: query.category,
        locality: query.locality,
        min_price: query.min_price,
        max_price: query.max_price,
        search: query.search,
        skip: query.skip.max(0),
        limit: query.limit.clamp(1, 100),
    };

    let vendors = Vendor::list(&filter, &state.db_pool).await?;
    Ok(Json(vendors.into_iter().map(Into::into).collect()))
}

/// `GET /vendors/featured`
pub async fn featured(
    State(state): State<AppState>,
    Query(query): Query<FeaturedQuery>,
) -> Result<Json<Vec<VendorResponse>>, ApiError> {
    let vendors = Vendor::find_featured(query.limit.clamp(1, 20), &state.db_pool).await?;
    Ok(Json(vendors.into_iter().map(Into::into).collect()))
}

/// `GET /vendors/categories`
pub async fn categories(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let categories = Vendor::categories(&state.db_pool).await?;
    Ok(Json(serde_json::json!({"categories": categories})))
}

/// `GET /vendors/localities`
pub async fn localities(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let localities = Vendor::localities(&state.db_pool).await?;
    Ok(Json(serde_json::json!({"localities": localities})))
}

/// `GET /vendors/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(vendor_id): Path<i64>,
) -> Result<Json<VendorResponse>, ApiError> {
    let vendor = Vendor::find_active(vendor_id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Vendor"))?;

    Ok(Json(vendor.into()))
}
