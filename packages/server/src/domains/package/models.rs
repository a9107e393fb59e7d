use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgExecutor;

/// Package model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Package {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub discount_percentage: i32,
    pub duration: Option<String>,
    pub includes: Option<serde_json::Value>,
    pub vendors: Option<serde_json::Value>,
    pub is_popular: bool,
    pub is_customizable: bool,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Package {
    pub async fn find_active<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM packages WHERE is_active = true ORDER BY created_at DESC",
        )
        .fetch_all(executor)
        .await
    }

    pub async fn find_popular<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM packages
             WHERE is_popular = true AND is_active = true
             ORDER BY created_at DESC",
        )
        .fetch_all(executor)
        .await
    }

    pub async fn find_by_id<'e>(
        id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM packages WHERE id = $1 AND is_active = true")
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
