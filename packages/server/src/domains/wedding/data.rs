use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domains::wedding::models::Wedding;

fn default_duration() -> i32 {
    2
}

fn default_estimated_guests() -> i32 {
    100
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWeddingRequest {
    pub name: String,
    pub locality: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub is_date_fixed: bool,
    #[serde(default = "default_duration")]
    pub duration: i32,
    pub events: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    #[serde(default = "default_estimated_guests")]
    pub estimated_guests: i32,
    pub budget: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWeddingRequest {
    pub name: Option<String>,
    pub locality: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub is_date_fixed: Option<bool>,
    pub duration: Option<i32>,
    pub events: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub estimated_guests: Option<i32>,
    pub actual_guests: Option<i32>,
    pub budget: Option<Decimal>,
    pub status: Option<String>,
    pub family_details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeddingResponse {
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
}

impl From<Wedding> for WeddingResponse {
    fn from(wedding: Wedding) -> Self {
        Self {
            id: wedding.id,
            user_id: wedding.user_id,
            name: wedding.name,
            locality: wedding.locality,
            date: wedding.date,
            is_date_fixed: wedding.is_date_fixed,
            duration: wedding.duration,
            events: wedding.events,
            categories: wedding.categories,
            estimated_guests: wedding.estimated_guests,
            actual_guests: wedding.actual_guests,
            budget: wedding.budget,
            spent: wedding.spent,
            status: wedding.status,
            family_details: wedding.family_details,
            created_at: wedding.created_at,
        }
    }
}
