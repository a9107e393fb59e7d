// Forever N Co. - Wedding Services API Core
//
// This crate provides the backend API for the wedding-planning platform:
// phone-number identity (Firebase ID tokens with a legacy JWT fallback),
// wedding projects, vendors, packages, cart bookings, guests and the
// family-relationship graph.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
