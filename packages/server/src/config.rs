use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub secret_key: String,
    pub jwt_issuer: String,
    pub access_token_expire_minutes: i64,
    pub firebase_project_id: Option<String>,
    pub firebase_service_account_key: Option<String>,
    pub google_places_api_key: Option<String>,
    pub google_place_id: Option<String>,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            secret_key: env::var("SECRET_KEY").context("SECRET_KEY must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "forevernco-api".to_string()),
            access_token_expire_minutes: env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("ACCESS_TOKEN_EXPIRE_MINUTES must be a valid number")?,
            firebase_project_id: env::var("FIREBASE_PROJECT_ID").ok(),
            firebase_service_account_key: env::var("FIREBASE_SERVICE_ACCOUNT_KEY").ok(),
            google_places_api_key: env::var("GOOGLE_PLACES_API_KEY").ok(),
            google_place_id: env::var("GOOGLE_PLACE_ID").ok(),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["http://localhost:3000".to_string()]),
        })
    }

    /// Resolve the Firebase project id from `FIREBASE_PROJECT_ID` or from the
    /// configured service-account key file.
    ///
    /// Called once at bootstrap; a missing or unreadable trust root aborts
    /// startup rather than failing per-request.
    pub fn firebase_project_id(&self) -> Result<String> {
        if let Some(project_id) = &self.firebase_project_id {
            return Ok(project_id.clone());
        }

        let path = self
            .firebase_service_account_key
            .as_deref()
            .context("FIREBASE_PROJECT_ID or FIREBASE_SERVICE_ACCOUNT_KEY must be set")?;

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read service account key at {path}"))?;
        let key: ServiceAccountKey =
            serde_json::from_str(&raw).context("Service account key is not valid JSON")?;

        Ok(key.project_id)
    }
}

#[derive(Debug, serde::Deserialize)]
struct ServiceAccountKey {
    project_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_env_wins_over_key_file() {
        let config = Config {
            database_url: String::new(),
            port: 8080,
            secret_key: "secret".to_string(),
            jwt_issuer: "test".to_string(),
            access_token_expire_minutes: 30,
            firebase_project_id: Some("demo-project".to_string()),
            firebase_service_account_key: Some("/nonexistent.json".to_string()),
            google_places_api_key: None,
            google_place_id: None,
            allowed_origins: vec![],
        };

        assert_eq!(config.firebase_project_id().unwrap(), "demo-project");
    }

    #[test]
    fn missing_trust_root_is_an_error() {
        let config = Config {
            database_url: String::new(),
            port: 8080,
            secret_key: "secret".to_string(),
            jwt_issuer: "test".to_string(),
            access_token_expire_minutes: 30,
            firebase_project_id: None,
            firebase_service_account_key: None,
            google_places_api_key: None,
            google_place_id: None,
            allowed_origins: vec![],
        };

        assert!(config.firebase_project_id().is_err());
    }
}
