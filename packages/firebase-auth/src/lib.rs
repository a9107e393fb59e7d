//! Verification of Firebase ID tokens against Google's published signing keys.
//!
//! Firebase issues RS256-signed ID tokens; the public keys rotate and are
//! served as a JWK set with a `Cache-Control: max-age` header. This crate
//! fetches the set once at startup, caches it for the advertised lifetime,
//! and refreshes on expiry or on an unrecognised key id.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use thiserror::Error;
use tokio::sync::RwLock;

pub mod models;

pub use crate::models::{IdTokenClaims, Jwk, JwkSet};

/// JWK endpoint for the securetoken signer used by Firebase Auth.
const GOOGLE_JWK_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

/// Key lifetime used when the endpoint does not advertise one.
const DEFAULT_KEY_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Error)]
pub enum FirebaseAuthError {
    #[error("token is missing a key id header")]
    MissingKeyId,

    #[error("no Google signing key matches key id {0}")]
    UnknownKeyId(String),

    #[error("failed to fetch Google signing keys: {0}")]
    KeyFetch(#[from] reqwest::Error),

    #[error("invalid ID token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

struct KeyCache {
    keys: HashMap<String, Jwk>,
    expires_at: Instant,
}

impl KeyCache {
    fn empty() -> Self {
        Self {
            keys: HashMap::new(),
            expires_at: Instant::now(),
        }
    }

    fn from_set(set: JwkSet, ttl: Duration) -> Self {
        Self {
            keys: set.keys.into_iter().map(|k| (k.kid.clone(), k)).collect(),
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_stale(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Verifier for Firebase ID tokens of a single Firebase project.
pub struct FirebaseAuth {
    project_id: String,
    client: reqwest::Client,
    cache: RwLock<KeyCache>,
}

impl FirebaseAuth {
    /// Connect to the Google JWK endpoint and build a verifier.
    ///
    /// Performs the initial key fetch, so an invalid network environment or
    /// endpoint failure is reported here rather than on the first request.
    pub async fn connect(project_id: impl Into<String>) -> Result<Self, FirebaseAuthError> {
        let auth = Self::new(project_id);
        let fresh = auth.fetch_keys().await?;
        *auth.cache.write().await = fresh;
        Ok(auth)
    }

    fn new(project_id: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            project_id: project_id.into(),
            client,
            cache: RwLock::new(KeyCache::empty()),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }

    /// Verify signature, expiry, audience and issuer of an ID token and
    /// return its claims.
    pub async fn verify_id_token(&self, token: &str) -> Result<IdTokenClaims, FirebaseAuthError> {
        let header = decode_header(token)?;
        let kid = header.kid.ok_or(FirebaseAuthError::MissingKeyId)?;

        let jwk = self.signing_key(&kid).await?;
        let key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[self.issuer()]);

        let data = decode::<IdTokenClaims>(token, &key, &validation)?;
        Ok(data.claims)
    }

    /// Look up a signing key, refreshing the cached set when it is stale or
    /// does not contain the requested key id (key rotation).
    async fn signing_key(&self, kid: &str) -> Result<Jwk, FirebaseAuthError> {
        {
            let cache = self.cache.read().await;
            if !cache.is_stale() {
                if let Some(jwk) = cache.keys.get(kid) {
                    return Ok(jwk.clone());
                }
            }
        }

        let fresh = self.fetch_keys().await?;
        let mut cache = self.cache.write().await;
        *cache = fresh;
        cache
            .keys
            .get(kid)
            .cloned()
            .ok_or_else(|| FirebaseAuthError::UnknownKeyId(kid.to_string()))
    }

    async fn fetch_keys(&self) -> Result<KeyCache, FirebaseAuthError> {
        let response = self
            .client
            .get(GOOGLE_JWK_URL)
            .send()
            .await?
            .error_for_status()?;

        let ttl = response
            .headers()
            .get(reqwest::header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(parse_max_age)
            .unwrap_or(DEFAULT_KEY_TTL);

        let set = response.json::<JwkSet>().await?;
        tracing::debug!(keys = set.keys.len(), ttl_secs = ttl.as_secs(), "refreshed Google signing keys");

        Ok(KeyCache::from_set(set, ttl))
    }
}

/// Extract `max-age` from a `Cache-Control` header value.
fn parse_max_age(value: &str) -> Duration {
    value
        .split(',')
        .find_map(|directive| directive.trim().strip_prefix("max-age="))
        .and_then(|secs| secs.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_KEY_TTL)
}
