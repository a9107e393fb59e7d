use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;

use crate::common::ApiError;
use crate::domains::relationship::data::{CreateRelationshipRequest, UpdateRelationshipRequest};
use crate::domains::relationship::models::{
    map_edge_violation, NewRelationship, Relationship, RelationshipChanges, RelationshipStatus,
};
use crate::domains::user::models::User;

/// Pending requests stay actionable for this long.
pub const PENDING_REQUEST_TTL_DAYS: i64 = 7;

fn pending_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(PENDING_REQUEST_TTL_DAYS)
}

/// A pending request past its expiry is no longer actionable.
fn request_expired(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    expires_at.is_some_and(|at| at <= now)
}

/// Create a new relationship request from the current user.
pub async fn create(
    pool: &PgPool,
    requester_id: i64,
    request: CreateRelationshipRequest,
) -> Result<Relationship, ApiError> {
    User::find_by_id(request.related_user_id, pool)
        .await?
        .ok_or(ApiError::NotFound("Related user"))?;

    if Relationship::edge_exists(
        requester_id,
        request.related_user_id,
        &request.relationship_type,
        pool,
    )
    .await?
    {
        return Err(ApiError::DuplicateRelationship);
    }

    let new_edge = NewRelationship {
        user_id: requester_id,
        related_user_id: request.related_user_id,
        relationship_type: request.relationship_type,
        relationship_name: request.relationship_name,
        is_primary: request.is_primary,
        privacy_level: request.privacy_level,
        expires_at: Some(pending_expiry(Utc::now())),
    };

    // The unique index on (requester, target, type) decides races that slip
    // past the pre-check.
    Relationship::insert(new_edge, pool)
        .await
        .map_err(map_edge_violation)
}

/// All edges requested by the user.
pub async fn list_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<Relationship>, ApiError> {
    Ok(Relationship::find_by_requester(user_id, pool).await?)
}

/// Actionable pending requests addressed to the user.
pub async fn list_pending(pool: &PgPool, user_id: i64) -> Result<Vec<Relationship>, ApiError> {
    Ok(Relationship::find_pending_for_target(user_id, pool).await?)
}

/// Accept or reject a pending request addressed to the user.
pub async fn respond(
    pool: &PgPool,
    relationship_id: i64,
    responding_user_id: i64,
    accept: bool,
) -> Result<Relationship, ApiError> {
    let pending = Relationship::find_response_candidate(relationship_id, responding_user_id, pool)
        .await?
        .ok_or(ApiError::NotFound("Relationship request"))?;

    if request_expired(pending.expires_at, Utc::now()) {
        return Err(ApiError::RequestExpired);
    }

    let status = if accept {
        RelationshipStatus::Accepted
    } else {
        RelationshipStatus::Rejected
    };

    // A concurrent response can win between the lookup and the update; the
    // guarded update then matches nothing and this call reports not-found.
    Relationship::mark_responded(relationship_id, status, pool)
        .await?
        .ok_or(ApiError::NotFound("Relationship request"))
}

/// Edit an edge's descriptive fields, scoped to its requester.
pub async fn update(
    pool: &PgPool,
    relationship_id: i64,
    requester_id: i64,
    request: UpdateRelationshipRequest,
) -> Result<Relationship, ApiError> {
    let changes = RelationshipChanges {
        relationship_type: request.relationship_type,
        relationship_name: request.relationship_name,
        is_primary: request.is_primary,
        privacy_level: request.privacy_level,
    };

    Relationship::update_for_requester(relationship_id, requester_id, changes, pool)
        .await
        .map_err(map_edge_violation)?
        .ok_or(ApiError::NotFound("Relationship"))
}

/// Delete an edge, scoped to its requester.
pub async fn delete(
    pool: &PgPool,
    relationship_id: i64,
    requester_id: i64,
) -> Result<(), ApiError> {
    if Relationship::delete_for_requester(relationship_id, requester_id, pool).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Relationship"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_requests_expire_after_seven_days() {
        let now = Utc::now();
        let expiry = pending_expiry(now);
        assert_eq!(expiry - now, Duration::days(7));
    }

    #[test]
    fn expiry_is_a_closed_boundary() {
        let now = Utc::now();

        // At exactly the expiry instant the request is no longer actionable,
        // matching the strict `expires_at > now()` pending query.
        assert!(request_expired(Some(now), now));
        assert!(request_expired(Some(now - Duration::seconds(1)), now));
        assert!(!request_expired(Some(now + Duration::seconds(1)), now));
    }

    #[test]
    fn responded_edges_have_no_expiry_to_trip() {
        assert!(!request_expired(None, Utc::now()));
    }
}
