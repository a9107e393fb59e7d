//! Signup reconciliation and access-token issuance.
//!
//! Signup is the only path that mints a user row. The create-or-update
//! sequence runs inside a single transaction; the phone-number unique
//! constraint decides concurrent races and the loser surfaces
//! `DuplicatePhone` without retry.

use sqlx::PgPool;
use tracing::info;

use crate::common::ApiError;
use crate::domains::auth::data::{FirebaseSignupRequest, TokenResponse};
use crate::domains::auth::jwt::JwtService;
use crate::domains::user::models::{map_unique_violation, NewUser, User, UserChanges};
use crate::kernel::ProviderIdentity;

/// Treat empty client-supplied strings as "not provided" during merge.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Merge rules for an existing user: profile fields replace stored values
/// only when non-empty; the provider subject id always wins; verification
/// is forced true.
fn merge_changes(firebase_uid: String, request: FirebaseSignupRequest) -> UserChanges {
    UserChanges {
        name: non_empty(request.name),
        email: non_empty(request.email),
        locality: non_empty(request.locality),
        firebase_uid: Some(firebase_uid),
        is_verified: Some(true),
    }
}

/// Create or update the user for a verified provider identity.
pub async fn firebase_signup(
    pool: &PgPool,
    identity: ProviderIdentity,
    request: FirebaseSignupRequest,
) -> Result<User, ApiError> {
    let phone_number = identity
        .phone_number
        .ok_or(ApiError::MissingPhoneClaim)?;

    let mut tx = pool.begin().await?;

    let user = match User::find_by_phone(&phone_number, &mut *tx).await? {
        Some(existing) => {
            let changes = merge_changes(identity.uid, request);
            let updated = User::update(existing.id, changes, &mut *tx)
                .await
                .map_err(map_unique_violation)?
                .ok_or(ApiError::NotFound("User"))?;
            info!(user_id = updated.id, "reconciled existing user at signup");
            updated
        }
        None => {
            let new_user = NewUser {
                phone_number,
                firebase_uid: Some(identity.uid),
                name: non_empty(request.name),
                email: non_empty(request.email),
                locality: non_empty(request.locality),
                is_verified: true,
            };
            let created = User::insert(new_user, &mut *tx)
                .await
                .map_err(map_unique_violation)?;
            info!(user_id = created.id, "created new user at signup");
            created
        }
    };

    tx.commit().await?;
    Ok(user)
}

/// Issue a backend access token for an already signed-up provider identity.
pub async fn issue_access_token(
    pool: &PgPool,
    jwt_service: &JwtService,
    identity: ProviderIdentity,
) -> Result<TokenResponse, ApiError> {
    let phone_number = identity
        .phone_number
        .ok_or(ApiError::MissingPhoneClaim)?;

    let user = User::find_by_phone(&phone_number, pool)
        .await?
        .ok_or(ApiError::SignupRequired)?;

    let access_token = jwt_service.create_token(user.id)?;
    Ok(TokenResponse::bearer(access_token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_do_not_participate_in_merge() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("Ann".to_string())), Some("Ann".to_string()));
    }

    #[test]
    fn merge_keeps_stored_fields_for_empty_input() {
        // Scenario: second signup sends an empty name and a new email.
        let changes = merge_changes(
            "firebase-uid-1".to_string(),
            FirebaseSignupRequest {
                name: Some(String::new()),
                email: Some("ann@x.com".to_string()),
                locality: None,
            },
        );

        assert_eq!(changes.name, None); // stored name survives COALESCE
        assert_eq!(changes.email, Some("ann@x.com".to_string()));
        assert_eq!(changes.locality, None);
        assert_eq!(changes.firebase_uid, Some("firebase-uid-1".to_string()));
        assert_eq!(changes.is_verified, Some(true));
    }

    #[test]
    fn provider_subject_always_overwrites() {
        let changes = merge_changes("fresh-uid".to_string(), FirebaseSignupRequest::default());
        assert_eq!(changes.firebase_uid, Some("fresh-uid".to_string()));
        assert_eq!(changes.is_verified, Some(true));
    }
}
