use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domains::cart::models::CartItem;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCartItemRequest {
    pub wedding_id: i64,
    pub vendor_id: i64,
    pub category: String,
    pub price: Decimal,
    pub booking_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCartItemRequest {
    pub price: Option<Decimal>,
    pub booking_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub visit_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartItemResponse {
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
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            user_id: item.user_id,
            wedding_id: item.wedding_id,
            vendor_id: item.vendor_id,
            category: item.category,
            price: item.price,
            booking_date: item.booking_date,
            status: item.status,
            visit_date: item.visit_date,
            notes: item.notes,
            created_at: item.created_at,
        }
    }
}

/// Totals over a user's cart.
#[derive(Debug, Clone, Serialize)]
pub struct CartSummary {
    pub total_items: usize,
    pub total_amount: Decimal,
    pub status_breakdown: HashMap<String, usize>,
}

impl CartSummary {
    pub fn of(items: &[CartItem]) -> Self {
        let total_amount = items.iter().map(|item| item.price).sum();

        let mut status_breakdown: HashMap<String, usize> = HashMap::new();
        for item in items {
            *status_breakdown.entry(item.status.clone()).or_default() += 1;
        }

        Self {
            total_items: items.len(),
            total_amount,
            status_breakdown,
        }
    }
}
