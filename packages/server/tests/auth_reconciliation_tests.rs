//! Integration tests for signup reconciliation and identity resolution.
//!
//! Covers the create-or-merge signup path, phone uniqueness under
//! concurrency, token issuance and the dual-mode current-user resolver.

mod common;

use common::{create_test_user, provider_identity, unique_phone, NoProvider, TestHarness};
use server_core::common::ApiError;
use server_core::domains::auth::actions::{firebase_signup, issue_access_token};
use server_core::domains::auth::data::FirebaseSignupRequest;
use server_core::domains::auth::verifier::resolve_current_user;
use server_core::domains::user::actions::update_profile;
use server_core::domains::user::data::UpdateUserRequest;
use server_core::domains::user::models::{map_unique_violation, NewUser, User};
use server_core::kernel::ProviderIdentity;
use test_context::test_context;

fn profile(name: Option<&str>, email: Option<&str>, locality: Option<&str>) -> FirebaseSignupRequest {
    FirebaseSignupRequest {
        name: name.map(str::to_string),
        email: email.map(str::to_string),
        locality: locality.map(str::to_string),
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_signup_creates_new_user(ctx: &TestHarness) {
    let phone = unique_phone();
    let identity = provider_identity(&phone);
    let uid = identity.uid.clone();

    let user = firebase_signup(&ctx.db_pool, identity, profile(Some("Ann"), None, None))
        .await
        .unwrap();

    assert_eq!(user.phone_number, phone);
    assert_eq!(user.name.as_deref(), Some("Ann"));
    assert_eq!(user.email, None);
    assert_eq!(user.firebase_uid.as_deref(), Some(uid.as_str()));
    assert!(user.is_verified);
    assert!(user.is_active);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_signup_merge_ignores_empty_fields(ctx: &TestHarness) {
    let phone = unique_phone();
    let email = format!("{}@example.com", &phone[1..]);

    firebase_signup(
        &ctx.db_pool,
        provider_identity(&phone),
        profile(Some("Ann"), None, None),
    )
    .await
    .unwrap();

    // Second signup: empty name must not clobber the stored one.
    let user = firebase_signup(
        &ctx.db_pool,
        provider_identity(&phone),
        profile(Some(""), Some(&email), None),
    )
    .await
    .unwrap();

    assert_eq!(user.name.as_deref(), Some("Ann"));
    assert_eq!(user.email.as_deref(), Some(email.as_str()));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_signup_is_idempotent(ctx: &TestHarness) {
    let phone = unique_phone();

    let first = firebase_signup(
        &ctx.db_pool,
        provider_identity(&phone),
        profile(Some("Ann"), None, Some("Mumbai")),
    )
    .await
    .unwrap();

    let second = firebase_signup(
        &ctx.db_pool,
        provider_identity(&phone),
        profile(Some("Ann"), None, Some("Mumbai")),
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.name, second.name);
    assert_eq!(first.locality, second.locality);
    assert_eq!(first.phone_number, second.phone_number);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_signup_overwrites_provider_subject(ctx: &TestHarness) {
    let phone = unique_phone();

    firebase_signup(&ctx.db_pool, provider_identity(&phone), profile(None, None, None))
        .await
        .unwrap();

    // A fresh provider account for the same phone takes over the uid.
    let new_identity = provider_identity(&phone);
    let new_uid = new_identity.uid.clone();
    let user = firebase_signup(&ctx.db_pool, new_identity, profile(None, None, None))
        .await
        .unwrap();

    assert_eq!(user.firebase_uid.as_deref(), Some(new_uid.as_str()));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_signup_without_phone_claim_fails(ctx: &TestHarness) {
    let identity = ProviderIdentity {
        uid: "uid-no-phone".to_string(),
        phone_number: None,
        email: None,
    };

    let err = firebase_signup(&ctx.db_pool, identity, profile(None, None, None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::MissingPhoneClaim));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_duplicate_phone_surfaces_as_conflict(ctx: &TestHarness) {
    let phone = unique_phone();
    create_test_user(&ctx.db_pool, &phone, "First").await.unwrap();

    // A direct insert bypassing the reconciliation lookup must lose at the
    // unique constraint.
    let err = User::insert(
        NewUser {
            phone_number: phone.clone(),
            firebase_uid: Some("uid-other".to_string()),
            name: None,
            email: None,
            locality: None,
            is_verified: true,
        },
        &ctx.db_pool,
    )
    .await
    .map_err(map_unique_violation)
    .unwrap_err();

    assert!(matches!(err, ApiError::DuplicatePhone));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_concurrent_signup_leaves_single_row(ctx: &TestHarness) {
    let phone = unique_phone();

    let (first, second) = tokio::join!(
        firebase_signup(
            &ctx.db_pool,
            provider_identity(&phone),
            profile(Some("A"), None, None),
        ),
        firebase_signup(
            &ctx.db_pool,
            provider_identity(&phone),
            profile(Some("B"), None, None),
        ),
    );

    // At least one signup wins; a loser may only fail with the duplicate
    // conflict, never anything else.
    assert!(first.is_ok() || second.is_ok());
    for result in [&first, &second] {
        if let Err(err) = result {
            assert!(matches!(err, ApiError::DuplicatePhone));
        }
    }

    let rows: i64 =
        sqlx::query_scalar("SELECT count(*) FROM users WHERE phone_number = $1")
            .bind(&phone)
            .fetch_one(&ctx.db_pool)
            .await
            .unwrap();
    assert_eq!(rows, 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_token_flow_round_trip(ctx: &TestHarness) {
    let phone = unique_phone();
    let user = create_test_user(&ctx.db_pool, &phone, "Ann").await.unwrap();

    let token = issue_access_token(&ctx.db_pool, &ctx.jwt_service, provider_identity(&phone))
        .await
        .unwrap();
    assert_eq!(token.token_type, "bearer");

    let claims = ctx.jwt_service.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_token_requires_completed_signup(ctx: &TestHarness) {
    let err = issue_access_token(
        &ctx.db_pool,
        &ctx.jwt_service,
        provider_identity(&unique_phone()),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::SignupRequired));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_resolve_current_user_via_session_token(ctx: &TestHarness) {
    let user = create_test_user(&ctx.db_pool, &unique_phone(), "Ann").await.unwrap();
    let token = ctx.jwt_service.create_token(user.id).unwrap();

    let resolved = resolve_current_user(&ctx.db_pool, &NoProvider, &ctx.jwt_service, &token)
        .await
        .unwrap();
    assert_eq!(resolved.id, user.id);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_resolve_rejects_garbage_token(ctx: &TestHarness) {
    let err = resolve_current_user(&ctx.db_pool, &NoProvider, &ctx.jwt_service, "garbage")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidCredential));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_resolve_rejects_unknown_user(ctx: &TestHarness) {
    let token = ctx.jwt_service.create_token(i64::MAX - 7).unwrap();

    let err = resolve_current_user(&ctx.db_pool, &NoProvider, &ctx.jwt_service, &token)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::IdentityNotFound));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_deactivated_user_is_rejected(ctx: &TestHarness) {
    let user = create_test_user(&ctx.db_pool, &unique_phone(), "Ann").await.unwrap();
    let token = ctx.jwt_service.create_token(user.id).unwrap();

    // Deactivation is idempotent as long as the row exists.
    assert!(User::deactivate(user.id, &ctx.db_pool).await.unwrap());
    assert!(User::deactivate(user.id, &ctx.db_pool).await.unwrap());

    let err = resolve_current_user(&ctx.db_pool, &NoProvider, &ctx.jwt_service, &token)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UserInactive));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_profile_update_keeps_absent_fields(ctx: &TestHarness) {
    let phone = unique_phone();
    let email = format!("{}@example.com", &phone[1..]);

    let user = firebase_signup(
        &ctx.db_pool,
        provider_identity(&phone),
        profile(Some("Ann"), Some(&email), Some("Mumbai")),
    )
    .await
    .unwrap();

    let updated = update_profile(
        &ctx.db_pool,
        user.id,
        UpdateUserRequest {
            name: Some("Ann Smith".to_string()),
            email: None,
            locality: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name.as_deref(), Some("Ann Smith"));
    assert_eq!(updated.email.as_deref(), Some(email.as_str()));
    assert_eq!(updated.locality.as_deref(), Some("Mumbai"));
    assert!(updated.updated_at.is_some());
}
