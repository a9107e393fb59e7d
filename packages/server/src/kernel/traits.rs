// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. The signup and
// identity-resolution logic lives in domain functions that use these traits.

use anyhow::Result;
use async_trait::async_trait;

/// Identity established by the external provider for a bearer token.
#[derive(Debug, Clone)]
pub struct ProviderIdentity {
    /// Provider-side subject id (Firebase UID).
    pub uid: String,
    /// E.164 phone number, when the account is phone-verified.
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// External identity provider (Firebase Auth in production).
///
/// Any `Err` means the token did not verify against the provider's trust
/// root; callers decide whether that is fatal or whether the next verifier
/// in the chain gets a turn.
#[async_trait]
pub trait BaseIdentityProvider: Send + Sync {
    async fn verify_id_token(&self, token: &str) -> Result<ProviderIdentity>;
}
