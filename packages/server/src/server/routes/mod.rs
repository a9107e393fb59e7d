//! Route handlers - thin HTTP adapters over domain actions.

pub mod auth;
pub mod cart;
pub mod guests;
pub mod health;
pub mod packages;
pub mod relationships;
pub mod reviews;
pub mod users;
pub mod vendors;
pub mod weddings;
