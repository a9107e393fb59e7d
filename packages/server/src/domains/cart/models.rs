use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgExecutor;

/// Cart item model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CartItem {
    pub id: i64,
    pub user_id: i64,
    pub wedding_id: i64,
    pub vendor_id: i64,
    pub category: String,
    pub price: Decimal,
    pub booking_date: DateTime<Utc>,
    pub status: String,
    pub visit_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub user_id: i64,
    pub wedding_id: i64,
    pub vendor_id: i64,
    pub category: String,
    pub price: Decimal,
    pub booking_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct CartItemChanges {
    pub price: Option<Decimal>,
    pub booking_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub visit_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl CartItem {
    pub async fn insert<'e>(
        new_item: NewCartItem,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO cart_items (user_id, wedding_id, vendor_id, category, price, booking_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(new_item.user_id)
        .bind(new_item.wedding_id)
        .bind(new_item.vendor_id)
        .bind(&new_item.category)
        .bind(new_item.price)
        .bind(new_item.booking_date)
        .fetch_one(executor)
        .await
    }

    pub async fn find_for_user<'e>(
        user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM cart_items WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
    }

    pub async fn update_for_user<'e>(
        id: i64,
        user_id: i64,
        changes: CartItemChanges,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE cart_items
             SET price = COALESCE($3, price),
                 booking_date = COALESCE($4, booking_date),
                 status = COALESCE($5, status),
                 visit_date = COALESCE($6, visit_date),
                 notes = COALESCE($7, notes),
                 updated_at = now()
             WHERE id = $1 AND user_id = $2
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(changes.price)
        .bind(changes.booking_date)
        .bind(&changes.status)
        .bind(changes.visit_date)
        .bind(&changes.notes)
        .fetch_optional(executor)
        .await
    }

    pub async fn delete_for_user<'e>(
        id: i64,
        user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
