use serde::Deserialize;

/// Decoded claims of a Firebase ID token.
///
/// Only the claims the backend consumes are modelled; signature, expiry,
/// audience and issuer are validated before these are produced.
#[derive(Debug, Clone, Deserialize)]
pub struct IdTokenClaims {
    /// Firebase UID of the authenticated account.
    pub sub: String,
    /// E.164 phone number, present when the account was verified by phone.
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// JSON Web Key set as published by Google's securetoken endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

/// A single RSA public key from the set.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    pub kid: String,
    pub kty: String,
    /// RSA modulus, base64url.
    pub n: String,
    /// RSA exponent, base64url.
    pub e: String,
    #[serde(default)]
    pub alg: Option<String>,
}
