//! Auth domain - identity verification and reconciliation.
//!
//! Responsibilities:
//! - Dual-mode bearer verification: Firebase ID tokens (provider trust
//!   root) with a legacy session-JWT fallback, as an explicit ordered chain
//! - Signup reconciliation: create-or-merge the user row keyed by the
//!   phone number asserted by the provider
//! - Session token issuance (HS256, short-lived)

pub mod actions;
pub mod data;
pub mod jwt;
pub mod verifier;

pub use data::{FirebaseSignupRequest, TokenResponse};
pub use jwt::{JwtService, SessionClaims};
pub use verifier::{resolve_current_user, verify_bearer, Verified};
