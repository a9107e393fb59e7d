//! Test fixtures for creating test data.
//!
//! Tests share one database, so identity-bearing fields (phone, email,
//! firebase uid) are generated unique per call.

use anyhow::Result;
use server_core::domains::user::models::{NewUser, User};
use server_core::kernel::ProviderIdentity;
use sqlx::PgPool;
use uuid::Uuid;

/// A phone number that no other test will produce.
pub fn unique_phone() -> String {
    format!("+9{:015}", Uuid::new_v4().as_u128() % 1_000_000_000_000_000)
}

/// Provider identity for a phone-verified Firebase account.
pub fn provider_identity(phone_number: &str) -> ProviderIdentity {
    ProviderIdentity {
        uid: format!("uid-{}", Uuid::new_v4()),
        phone_number: Some(phone_number.to_string()),
        email: None,
    }
}

/// Insert a verified user directly through the identity store.
pub async fn create_test_user(pool: &PgPool, phone_number: &str, name: &str) -> Result<User> {
    let user = User::insert(
        NewUser {
            phone_number: phone_number.to_string(),
            firebase_uid: Some(format!("uid-{}", Uuid::new_v4())),
            name: Some(name.to_string()),
            email: None,
            locality: None,
            is_verified: true,
        },
        pool,
    )
    .await?;

    Ok(user)
}
