//! Integration tests for the relationship graph lifecycle.

mod common;

use chrono::{Duration, Utc};
use common::{create_test_user, unique_phone, TestHarness};
use server_core::common::ApiError;
use server_core::domains::relationship::actions::{
    create, delete, list_for_user, list_pending, respond, update,
};
use server_core::domains::relationship::data::{
    CreateRelationshipRequest, UpdateRelationshipRequest,
};
use server_core::domains::relationship::models::{PrivacyLevel, RelationshipStatus};
use test_context::test_context;

fn parent_request(related_user_id: i64) -> CreateRelationshipRequest {
    CreateRelationshipRequest {
        related_user_id,
        relationship_type: "parent".to_string(),
        relationship_name: "Mother".to_string(),
        is_primary: true,
        privacy_level: PrivacyLevel::Private,
    }
}

async fn two_users(ctx: &TestHarness) -> (i64, i64) {
    let requester = create_test_user(&ctx.db_pool, &unique_phone(), "Requester")
        .await
        .unwrap();
    let target = create_test_user(&ctx.db_pool, &unique_phone(), "Target")
        .await
        .unwrap();
    (requester.id, target.id)
}

/// Push an edge's expiry into the past, simulating an aged request.
async fn expire_edge(ctx: &TestHarness, edge_id: i64) {
    sqlx::query("UPDATE relationships SET expires_at = now() - interval '1 day' WHERE id = $1")
        .bind(edge_id)
        .execute(&ctx.db_pool)
        .await
        .unwrap();
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_create_starts_pending_with_expiry(ctx: &TestHarness) {
    let (requester, target) = two_users(ctx).await;

    let edge = create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap();

    assert_eq!(edge.status, RelationshipStatus::Pending);
    assert_eq!(edge.user_id, requester);
    assert_eq!(edge.related_user_id, target);
    assert!(edge.responded_at.is_none());

    let expires_at = edge.expires_at.expect("pending edge carries an expiry");
    assert!(expires_at > Utc::now() + Duration::days(6));
    assert!(expires_at <= Utc::now() + Duration::days(7));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_create_requires_existing_target(ctx: &TestHarness) {
    let requester = create_test_user(&ctx.db_pool, &unique_phone(), "Requester")
        .await
        .unwrap();

    let err = create(&ctx.db_pool, requester.id, parent_request(i64::MAX - 11))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_duplicate_edge_is_rejected(ctx: &TestHarness) {
    let (requester, target) = two_users(ctx).await;

    create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap();

    let err = create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::DuplicateRelationship));

    // A different category is a different edge.
    let sibling = CreateRelationshipRequest {
        relationship_type: "sibling".to_string(),
        relationship_name: "Sister".to_string(),
        ..parent_request(target)
    };
    create(&ctx.db_pool, requester, sibling).await.unwrap();
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_duplicate_check_survives_status_change(ctx: &TestHarness) {
    let (requester, target) = two_users(ctx).await;

    let edge = create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap();
    respond(&ctx.db_pool, edge.id, target, true).await.unwrap();

    // The accepted edge still blocks an identical request.
    let err = create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::DuplicateRelationship));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_pending_listing_is_target_side(ctx: &TestHarness) {
    let (requester, target) = two_users(ctx).await;

    let edge = create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap();

    let pending_for_target = list_pending(&ctx.db_pool, target).await.unwrap();
    assert!(pending_for_target.iter().any(|e| e.id == edge.id));

    // The requester sees it in their own listing, not in pending.
    let requester_edges = list_for_user(&ctx.db_pool, requester).await.unwrap();
    assert!(requester_edges.iter().any(|e| e.id == edge.id));
    let pending_for_requester = list_pending(&ctx.db_pool, requester).await.unwrap();
    assert!(pending_for_requester.iter().all(|e| e.id != edge.id));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_expired_request_drops_out_of_pending(ctx: &TestHarness) {
    let (requester, target) = two_users(ctx).await;

    let edge = create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap();
    expire_edge(ctx, edge.id).await;

    let pending = list_pending(&ctx.db_pool, target).await.unwrap();
    assert!(pending.iter().all(|e| e.id != edge.id));

    // Still retrievable by the requester.
    let requester_edges = list_for_user(&ctx.db_pool, requester).await.unwrap();
    assert!(requester_edges.iter().any(|e| e.id == edge.id));

    // And no longer answerable.
    let err = respond(&ctx.db_pool, edge.id, target, true).await.unwrap_err();
    assert!(matches!(err, ApiError::RequestExpired));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_accept_transitions_exactly_once(ctx: &TestHarness) {
    let (requester, target) = two_users(ctx).await;

    let edge = create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap();

    let accepted = respond(&ctx.db_pool, edge.id, target, true).await.unwrap();
    assert_eq!(accepted.status, RelationshipStatus::Accepted);
    assert!(accepted.responded_at.is_some());

    // Scenario C: a second response finds nothing pending.
    let err = respond(&ctx.db_pool, edge.id, target, true).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_reject_records_response(ctx: &TestHarness) {
    let (requester, target) = two_users(ctx).await;

    let edge = create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap();

    let rejected = respond(&ctx.db_pool, edge.id, target, false).await.unwrap();
    assert_eq!(rejected.status, RelationshipStatus::Rejected);
    assert!(rejected.responded_at.is_some());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_only_the_target_may_respond(ctx: &TestHarness) {
    let (requester, target) = two_users(ctx).await;

    let edge = create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap();

    let err = respond(&ctx.db_pool, edge.id, requester, true).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_update_is_requester_scoped(ctx: &TestHarness) {
    let (requester, target) = two_users(ctx).await;

    let edge = create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap();

    let changes = UpdateRelationshipRequest {
        relationship_name: Some("Mum".to_string()),
        ..UpdateRelationshipRequest::default()
    };

    // The target has no edit rights.
    let err = update(&ctx.db_pool, edge.id, target, changes.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let updated = update(&ctx.db_pool, edge.id, requester, changes).await.unwrap();
    assert_eq!(updated.relationship_name, "Mum");
    // Untouched fields survive the partial update.
    assert_eq!(updated.relationship_type, "parent");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_delete_is_requester_scoped(ctx: &TestHarness) {
    let (requester, target) = two_users(ctx).await;

    let edge = create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap();

    let err = delete(&ctx.db_pool, edge.id, target).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    delete(&ctx.db_pool, edge.id, requester).await.unwrap();

    // Once the edge is gone the triple is free again.
    create(&ctx.db_pool, requester, parent_request(target))
        .await
        .unwrap();
}
