//! Cart domain - vendor bookings collected for a wedding.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{CartItemResponse, CartSummary, CreateCartItemRequest, UpdateCartItemRequest};
pub use models::CartItem;
