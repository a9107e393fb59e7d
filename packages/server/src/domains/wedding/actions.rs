use sqlx::PgPool;

use crate::common::ApiError;
use crate::domains::wedding::data::{CreateWeddingRequest, UpdateWeddingRequest};
use crate::domains::wedding::models::{NewWedding, Wedding, WeddingChanges};

pub async fn create(
    pool: &PgPool,
    user_id: i64,
    request: CreateWeddingRequest,
) -> Result<Wedding, ApiError> {
    let new_wedding = NewWedding {
        user_id,
        name: request.name,
        locality: request.locality,
        date: request.date,
        is_date_fixed: request.is_date_fixed,
        duration: request.duration,
        events: request.events.map(serde_json::Value::from),
        categories: request.categories.map(serde_json::Value::from),
        estimated_guests: request.estimated_guests,
        budget: request.budget,
    };

    Ok(Wedding::insert(new_wedding, pool).await?)
}

pub async fn list(pool: &PgPool, user_id: i64) -> Result<Vec<Wedding>, ApiError> {
    Ok(Wedding::find_for_user(user_id, pool).await?)
}

pub async fn get(pool: &PgPool, wedding_id: i64, user_id: i64) -> Result<Wedding, ApiError> {
    Wedding::find_by_id_for_user(wedding_id, user_id, pool)
        .await?
        .ok_or(ApiError::NotFound("Wedding"))
}

pub async fn update(
    pool: &PgPool,
    wedding_id: i64,
    user_id: i64,
    request: UpdateWeddingRequest,
) -> Result<Wedding, ApiError> {
    let changes = WeddingChanges {
        name: request.name,
        locality: request.locality,
        date: request.date,
        is_date_fixed: request.is_date_fixed,
        duration: request.duration,
        events: request.events.map(serde_json::Value::from),
        categories: request.categories.map(serde_json::Value::from),
        estimated_guests: request.estimated_guests,
        actual_guests: request.actual_guests,
        budget: request.budget,
        status: request.status,
        family_details: request.family_details,
    };

    Wedding::update_for_user(wedding_id, user_id, changes, pool)
        .await?
        .ok_or(ApiError::NotFound("Wedding"))
}

pub async fn delete(pool: &PgPool, wedding_id: i64, user_id: i64) -> Result<(), ApiError> {
    if Wedding::delete_for_user(wedding_id, user_id, pool).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Wedding"))
    }
}
