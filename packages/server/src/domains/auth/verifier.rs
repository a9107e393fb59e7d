//! Dual-mode bearer verification.
//!
//! Inbound bearer strings are tried against an explicit ordered chain:
//! first the external provider (Firebase ID token), then the legacy
//! session JWT. Each verifier yields a tagged outcome rather than driving
//! control flow through errors; only the last verifier fails hard.
//!
//! The signup and token endpoints do NOT use the chain - they verify in
//! provider mode exclusively and fail closed.

use sqlx::PgPool;

use crate::common::ApiError;
use crate::domains::auth::jwt::JwtService;
use crate::domains::user::models::User;
use crate::kernel::BaseIdentityProvider;

/// Subject established by a successful verification.
#[derive(Debug, Clone)]
pub enum Verified {
    /// External-provider assertion for a phone-verified account.
    Provider {
        phone_number: String,
        firebase_uid: String,
    },
    /// Locally issued session token.
    Session { user_id: i64 },
}

/// Outcome of a single verifier in the chain.
enum Attempt {
    Verified(Verified),
    TryNext,
}

async fn attempt_provider(provider: &dyn BaseIdentityProvider, token: &str) -> Attempt {
    match provider.verify_id_token(token).await {
        Ok(identity) => match identity.phone_number {
            Some(phone_number) => Attempt::Verified(Verified::Provider {
                phone_number,
                firebase_uid: identity.uid,
            }),
            None => {
                tracing::debug!("provider token verified but carries no phone claim");
                Attempt::TryNext
            }
        },
        Err(err) => {
            tracing::debug!(error = %err, "provider verification failed");
            Attempt::TryNext
        }
    }
}

fn attempt_session(jwt_service: &JwtService, token: &str) -> Result<Verified, ApiError> {
    let claims = jwt_service
        .verify_token(token)
        .map_err(|_| ApiError::InvalidCredential)?;
    let user_id = claims.user_id().map_err(|_| ApiError::InvalidCredential)?;

    Ok(Verified::Session { user_id })
}

/// Run the verifier chain over a bearer string.
pub async fn verify_bearer(
    provider: &dyn BaseIdentityProvider,
    jwt_service: &JwtService,
    token: &str,
) -> Result<Verified, ApiError> {
    if let Attempt::Verified(verified) = attempt_provider(provider, token).await {
        return Ok(verified);
    }

    attempt_session(jwt_service, token)
}

/// Resolve a bearer string to an active user row.
///
/// Provider subjects resolve by phone number, session subjects by internal
/// id. Missing and inactive users are distinct 401 failures, separate from
/// credential validity.
pub async fn resolve_current_user(
    pool: &PgPool,
    provider: &dyn BaseIdentityProvider,
    jwt_service: &JwtService,
    token: &str,
) -> Result<User, ApiError> {
    let user = match verify_bearer(provider, jwt_service, token).await? {
        Verified::Provider { phone_number, .. } => User::find_by_phone(&phone_number, pool)
            .await?
            .ok_or(ApiError::IdentityNotFound)?,
        Verified::Session { user_id } => User::find_by_id(user_id, pool)
            .await?
            .ok_or(ApiError::IdentityNotFound)?,
    };

    if !user.is_active {
        return Err(ApiError::UserInactive);
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::ProviderIdentity;
    use async_trait::async_trait;
    use jsonwebtoken::{encode, EncodingKey, Header};

    /// Provider stub returning a fixed outcome.
    struct StaticProvider(Option<ProviderIdentity>);

    #[async_trait]
    impl BaseIdentityProvider for StaticProvider {
        async fn verify_id_token(&self, _token: &str) -> anyhow::Result<ProviderIdentity> {
            self.0
                .clone()
                .ok_or_else(|| anyhow::anyhow!("invalid ID token"))
        }
    }

    fn jwt() -> JwtService {
        JwtService::new("test_secret_key", "test_issuer".to_string(), 30)
    }

    fn phone_identity() -> ProviderIdentity {
        ProviderIdentity {
            uid: "firebase-uid-1".to_string(),
            phone_number: Some("+15550001111".to_string()),
            email: None,
        }
    }

    #[tokio::test]
    async fn provider_claim_wins_over_session_mode() {
        let provider = StaticProvider(Some(phone_identity()));
        // A bearer string that is also a valid session token; the provider
        // verifier is first in the chain and must win.
        let token = jwt().create_token(99).unwrap();

        let verified = verify_bearer(&provider, &jwt(), &token).await.unwrap();
        match verified {
            Verified::Provider {
                phone_number,
                firebase_uid,
            } => {
                assert_eq!(phone_number, "+15550001111");
                assert_eq!(firebase_uid, "firebase-uid-1");
            }
            Verified::Session { .. } => panic!("expected provider mode"),
        }
    }

    #[tokio::test]
    async fn missing_phone_claim_falls_back_to_session_mode() {
        let provider = StaticProvider(Some(ProviderIdentity {
            uid: "firebase-uid-1".to_string(),
            phone_number: None,
            email: Some("ann@example.com".to_string()),
        }));
        let token = jwt().create_token(42).unwrap();

        let verified = verify_bearer(&provider, &jwt(), &token).await.unwrap();
        assert!(matches!(verified, Verified::Session { user_id: 42 }));
    }

    #[tokio::test]
    async fn provider_failure_falls_back_to_session_mode() {
        let provider = StaticProvider(None);
        let token = jwt().create_token(42).unwrap();

        let verified = verify_bearer(&provider, &jwt(), &token).await.unwrap();
        assert!(matches!(verified, Verified::Session { user_id: 42 }));
    }

    #[tokio::test]
    async fn both_modes_failing_is_invalid_credential() {
        let provider = StaticProvider(None);

        let err = verify_bearer(&provider, &jwt(), "garbage").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredential));
    }

    #[tokio::test]
    async fn session_token_with_non_numeric_subject_is_rejected() {
        let provider = StaticProvider(None);

        // Hand-craft a session token whose subject is not a user id.
        let claims = SessionClaimsForTest {
            sub: "not-a-number".to_string(),
            exp: (chrono::Utc::now() + chrono::Duration::minutes(5)).timestamp(),
            iat: chrono::Utc::now().timestamp(),
            iss: "test_issuer".to_string(),
            jti: "jti".to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test_secret_key"),
        )
        .unwrap();

        let err = verify_bearer(&provider, &jwt(), &token).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredential));
    }

    #[derive(serde::Serialize)]
    struct SessionClaimsForTest {
        sub: String,
        exp: i64,
        iat: i64,
        iss: String,
        jti: String,
    }
}
