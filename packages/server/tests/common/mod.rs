// Common test utilities

pub mod fixtures;
pub mod harness;

pub use fixtures::*;
pub use harness::*;

use anyhow::anyhow;
use async_trait::async_trait;
use server_core::kernel::{BaseIdentityProvider, ProviderIdentity};

/// Identity provider stub for tests that exercise the legacy token path:
/// every provider verification fails, so the chain falls through.
pub struct NoProvider;

#[async_trait]
impl BaseIdentityProvider for NoProvider {
    async fn verify_id_token(&self, _token: &str) -> anyhow::Result<ProviderIdentity> {
        Err(anyhow!("provider verification unavailable in tests"))
    }
}
