use sqlx::PgPool;
use tracing::info;

use crate::common::ApiError;
use crate::domains::guest::data::{CreateGuestRequest, GuestStatistics, UpdateGuestRequest};
use crate::domains::guest::models::{Guest, GuestChanges, NewGuest};

pub async fn add(
    pool: &PgPool,
    user_id: i64,
    request: CreateGuestRequest,
) -> Result<Guest, ApiError> {
    let new_guest = NewGuest {
        user_id,
        wedding_id: request.wedding_id,
        name: request.name,
        phone_number: request.phone_number,
        email: request.email,
        relation: request.relation,
        category: request.category,
    };

    Ok(Guest::insert(new_guest, pool).await?)
}

pub async fn list(pool: &PgPool, user_id: i64, wedding_id: i64) -> Result<Vec<Guest>, ApiError> {
    Ok(Guest::find_for_wedding(user_id, wedding_id, pool).await?)
}

pub async fn update(
    pool: &PgPool,
    guest_id: i64,
    user_id: i64,
    request: UpdateGuestRequest,
) -> Result<Guest, ApiError> {
    let changes = GuestChanges {
        name: request.name,
        phone_number: request.phone_number,
        email: request.email,
        relation: request.relation,
        category: request.category,
        confirmation_status: request.confirmation_status,
        notes: request.notes,
    };

    Guest::update_for_user(guest_id, user_id, changes, pool)
        .await?
        .ok_or(ApiError::NotFound("Guest"))
}

pub async fn delete(pool: &PgPool, guest_id: i64, user_id: i64) -> Result<(), ApiError> {
    if Guest::delete_for_user(guest_id, user_id, pool).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Guest"))
    }
}

/// Mark a guest as invited.
///
/// Delivery itself (mail/SMS) is outside this service; the event is logged
/// for the operator.
pub async fn send_invitation(pool: &PgPool, guest_id: i64, user_id: i64) -> Result<Guest, ApiError> {
    let guest = Guest::mark_invited(guest_id, user_id, pool)
        .await?
        .ok_or(ApiError::NotFound("Guest"))?;

    info!(guest_id = guest.id, wedding_id = guest.wedding_id, "guest invitation recorded");
    Ok(guest)
}

pub async fn statistics(
    pool: &PgPool,
    user_id: i64,
    wedding_id: i64,
) -> Result<GuestStatistics, ApiError> {
    let guests = Guest::find_for_wedding(user_id, wedding_id, pool).await?;
    Ok(GuestStatistics::of(&guests))
}
