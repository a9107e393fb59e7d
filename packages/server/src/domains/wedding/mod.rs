//! Wedding domain - a user's wedding projects.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{CreateWeddingRequest, UpdateWeddingRequest, WeddingResponse};
pub use models::Wedding;
