use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domains::package::models::Package;

/// Public API representation of a package.
#[derive(Debug, Clone, Serialize)]
pub struct PackageResponse {
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
}

impl From<Package> for PackageResponse {
    fn from(package: Package) -> Self {
        Self {
            id: package.id,
            name: package.name,
            description: package.description,
            price: package.price,
            original_price: package.original_price,
            discount_percentage: package.discount_percentage,
            duration: package.duration,
            includes: package.includes,
            vendors: package.vendors,
            is_popular: package.is_popular,
            is_customizable: package.is_customizable,
            is_active: package.is_active,
            image_url: package.image_url,
            created_at: package.created_at,
        }
    }
}
