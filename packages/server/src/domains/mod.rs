//! Business domains.
//!
//! Each domain owns its persistence models (`models`), its API
//! representations (`data`) and its business logic (`actions`); HTTP
//! handlers in `server::routes` stay thin.

pub mod auth;
pub mod cart;
pub mod guest;
pub mod package;
pub mod relationship;
pub mod reviews;
pub mod user;
pub mod vendor;
pub mod wedding;
