use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use firebase_auth::FirebaseAuth;

use crate::kernel::traits::{BaseIdentityProvider, ProviderIdentity};

/// Adapter exposing [`FirebaseAuth`] through the identity-provider trait.
pub struct FirebaseAdapter(pub Arc<FirebaseAuth>);

impl FirebaseAdapter {
    pub fn new(auth: Arc<FirebaseAuth>) -> Self {
        Self(auth)
    }
}

#[async_trait]
impl BaseIdentityProvider for FirebaseAdapter {
    async fn verify_id_token(&self, token: &str) -> Result<ProviderIdentity> {
        let claims = self.0.verify_id_token(token).await?;

        Ok(ProviderIdentity {
            uid: claims.sub,
            phone_number: claims.phone_number,
            email: claims.email,
        })
    }
}
