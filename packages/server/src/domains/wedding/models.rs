use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgExecutor;

/// Wedding model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Wedding {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub locality: String,
    pub date: DateTime<Utc>,
    pub is_date_fixed: bool,
    pub duration: i32,
    pub events: Option<serde_json::Value>,
    pub categories: Option<serde_json::Value>,
    pub estimated_guests: i32,
    pub actual_guests: Option<i32>,
    pub budget: Decimal,
    pub spent: Decimal,
    pub status: String,
    pub family_details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewWedding {
    pub user_id: i64,
    pub name: String,
    pub locality: String,
    pub date: DateTime<Utc>,
    pub is_date_fixed: bool,
    pub duration: i32,
    pub events: Option<serde_json::Value>,
    pub categories: Option<serde_json::Value>,
    pub estimated_guests: i32,
    pub budget: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct WeddingChanges {
    pub name: Option<String>,
    pub locality: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub is_date_fixed: Option<bool>,
    pub duration: Option<i32>,
    pub events: Option<serde_json::Value>,
    pub categories: Option<serde_json::Value>,
    pub estimated_guests: Option<i32>,
    pub actual_guests: Option<i32>,
    pub budget: Option<Decimal>,
    pub status: Option<String>,
    pub family_details: Option<serde_json::Value>,
}

impl Wedding {
    pub async fn insert<'e>(
        new_wedding: NewWedding,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO weddings (
                user_id, name, locality, date, is_date_fixed, duration,
                events, categories, estimated_guests, budget
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *",
        )
        .bind(new_wedding.user_id)
        .bind(&new_wedding.name)
        .bind(&new_wedding.locality)
        .bind(new_wedding.date)
        .bind(new_wedding.is_date_fixed)
        .bind(new_wedding.duration)
        .bind(&new_wedding.events)
        .bind(&new_wedding.categories)
        .bind(new_wedding.estimated_guests)
        .bind(new_wedding.budget)
        .fetch_one(executor)
        .await
    }

    pub async fn find_for_user<'e>(
        user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM weddings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
    }

    /// Scoped lookup: a wedding is only visible to its owner.
    pub async fn find_by_id_for_user<'e>(
        id: i64,
        user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM weddings WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(executor)
            .await
    }

    pub async fn update_for_user<'e>(
        id: i64,
        user_id: i64,
        changes: WeddingChanges,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE weddings
             SET name = COALESCE($3, name),
                 locality = COALESCE($4, locality),
                 date = COALESCE($5, date),
                 is_date_fixed = COALESCE($6, is_date_fixed),
                 duration = COALESCE($7, duration),
                 events = COALESCE($8, events),
                 categories = COALESCE($9, categories),
                 estimated_guests = COALESCE($10, estimated_guests),
                 actual_guests = COALESCE($11, actual_guests),
                 budget = COALESCE($12, budget),
                 status = COALESCE($13, status),
                 family_details = COALESCE($14, family_details),
                 updated_at = now()
             WHERE id = $1 AND user_id = $2
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(&changes.name)
        .bind(&changes.locality)
        .bind(changes.date)
        .bind(changes.is_date_fixed)
        .bind(changes.duration)
        .bind(&changes.events)
        .bind(&changes.categories)
        .bind(changes.estimated_guests)
        .bind(changes.actual_guests)
        .bind(changes.budget)
        .bind(&changes.status)
        .bind(&changes.family_details)
        .fetch_optional(executor)
        .await
    }

    pub async fn delete_for_user<'e>(
        id: i64,
        user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM weddings WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
