//! Guest domain - a wedding's guest list.
//!
//! Invitation delivery itself is out of scope; sending marks the guest and
//! is logged.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{CreateGuestRequest, GuestResponse, GuestStatistics, UpdateGuestRequest};
pub use models::Guest;
