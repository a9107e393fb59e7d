use sqlx::PgPool;

use crate::common::ApiError;
use crate::domains::cart::data::{CartSummary, CreateCartItemRequest, UpdateCartItemRequest};
use crate::domains::cart::models::{CartItem, CartItemChanges, NewCartItem};

pub async fn add(
    pool: &PgPool,
    user_id: i64,
    request: CreateCartItemRequest,
) -> Result<CartItem, ApiError> {
    let new_item = NewCartItem {
        user_id,
        wedding_id: request.wedding_id,
        vendor_id: request.vendor_id,
        category: request.category,
        price: request.price,
        booking_date: request.booking_date,
    };

    Ok(CartItem::insert(new_item, pool).await?)
}

pub async fn list(pool: &PgPool, user_id: i64) -> Result<Vec<CartItem>, ApiError> {
    Ok(CartItem::find_for_user(user_id, pool).await?)
}

pub async fn update(
    pool: &PgPool,
    item_id: i64,
    user_id: i64,
    request: UpdateCartItemRequest,
) -> Result<CartItem, ApiError> {
    let changes = CartItemChanges {
        price: request.price,
        booking_date: request.booking_date,
        status: request.status,
        visit_date: request.visit_date,
        notes: request.notes,
    };

    CartItem::update_for_user(item_id, user_id, changes, pool)
        .await?
        .ok_or(ApiError::NotFound("Cart item"))
}

pub async fn remove(pool: &PgPool, item_id: i64, user_id: i64) -> Result<(), ApiError> {
    if CartItem::delete_for_user(item_id, user_id, pool).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Cart item"))
    }
}

pub async fn summary(pool: &PgPool, user_id: i64) -> Result<CartSummary, ApiError> {
    let items = CartItem::find_for_user(user_id, pool).await?;
    Ok(CartSummary::of(&items))
}
