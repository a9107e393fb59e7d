use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::common::ApiError;
use crate::domains::reviews::{BusinessRating, ReviewsPage};
use crate::server::app::AppState;

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct ReviewsQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// `GET /reviews` - paginated Google reviews for testimonials
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ReviewsQuery>,
) -> Result<Json<ReviewsPage>, ApiError> {
    let page = state
        .reviews
        .recent_reviews(query.page.max(1), query.limit.clamp(1, 50))
        .await?;

    Ok(Json(page))
}

/// `GET /reviews/business-rating`
pub async fn business_rating(
    State(state): State<AppState>,
) -> Result<Json<BusinessRating>, ApiError> {
    let rating = state.reviews.business_rating().await?;
    Ok(Json(rating))
}
