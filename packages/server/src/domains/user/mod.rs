//! User domain - the identity anchor.
//!
//! A user is keyed by phone number (unique, never changes once set) and is
//! minted exclusively by the signup reconciliation in `domains::auth`.
//! Deletion is logical: `is_active = false`.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{UpdateUserRequest, UserResponse};
pub use models::{NewUser, User, UserChanges};
