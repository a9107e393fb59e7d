use serde::{Deserialize, Serialize};

/// Optional profile fields supplied by the client at signup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirebaseSignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub locality: Option<String>,
}

/// Backend access token issued after Firebase verification.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}
