use sqlx::PgPool;

use crate::common::ApiError;
use crate::domains::user::data::UpdateUserRequest;
use crate::domains::user::models::{map_unique_violation, User, UserChanges};

/// Edit the current user's profile fields.
pub async fn update_profile(
    pool: &PgPool,
    user_id: i64,
    request: UpdateUserRequest,
) -> Result<User, ApiError> {
    let changes = UserChanges {
        name: request.name,
        email: request.email,
        locality: request.locality,
        ..UserChanges::default()
    };

    User::update(user_id, changes, pool)
        .await
        .map_err(map_unique_violation)?
        .ok_or(ApiError::NotFound("User"))
}

/// Deactivate the current user's account (logical deletion).
pub async fn deactivate_account(pool: &PgPool, user_id: i64) -> Result<(), ApiError> {
    if User::deactivate(user_id, pool).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("User"))
    }
}

/// Look up another user by phone number (exact match).
pub async fn find_by_phone(pool: &PgPool, phone_number: &str) -> Result<User, ApiError> {
    User::find_by_phone(phone_number, pool)
        .await?
        .ok_or(ApiError::NotFound("User"))
}
