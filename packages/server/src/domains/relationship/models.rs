use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

use crate::common::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "relationship_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RelationshipStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "privacy_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    Public,
    Friends,
    Private,
}

impl Default for PrivacyLevel {
    fn default() -> Self {
        Self::Private
    }
}

/// Relationship model - SQL persistence layer
///
/// `user_id` is the requester, `related_user_id` the target. The triple
/// (user_id, related_user_id, relationship_type) is unique while the edge
/// exists, regardless of status.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Relationship {
    pub id: i64,
    pub user_id: i64,
    pub related_user_id: i64,
    pub relationship_type: String,
    pub relationship_name: String,
    pub is_primary: bool,
    pub privacy_level: PrivacyLevel,
    pub status: RelationshipStatus,
    pub requested_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for a new edge.
#[derive(Debug, Clone)]
pub struct NewRelationship {
    pub user_id: i64,
    pub related_user_id: i64,
    pub relationship_type: String,
    pub relationship_name: String,
    pub is_primary: bool,
    pub privacy_level: PrivacyLevel,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Partial edit of a non-lifecycle field; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct RelationshipChanges {
    pub relationship_type: Option<String>,
    pub relationship_name: Option<String>,
    pub is_primary: Option<bool>,
    pub privacy_level: Option<PrivacyLevel>,
}

impl Relationship {
    /// Insert a new pending edge
    pub async fn insert<'e>(
        new_edge: NewRelationship,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO relationships (
                user_id,
                related_user_id,
                relationship_type,
                relationship_name,
                is_primary,
                privacy_level,
                expires_at
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(new_edge.user_id)
        .bind(new_edge.related_user_id)
        .bind(&new_edge.relationship_type)
        .bind(&new_edge.relationship_name)
        .bind(new_edge.is_primary)
        .bind(new_edge.privacy_level)
        .bind(new_edge.expires_at)
        .fetch_one(executor)
        .await
    }

    /// All edges where the user is the requester
    pub async fn find_by_requester<'e>(
        user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM relationships WHERE user_id = $1 ORDER BY requested_at DESC",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
    }

    /// Actionable pending requests addressed to the user.
    ///
    /// Expired requests are excluded here, not transitioned.
    pub async fn find_pending_for_target<'e>(
        user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM relationships
             WHERE related_user_id = $1
               AND status = 'pending'
               AND expires_at > now()
             ORDER BY requested_at DESC",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
    }

    /// The pending edge a target user may respond to, if any
    pub async fn find_response_candidate<'e>(
        id: i64,
        target_user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM relationships
             WHERE id = $1 AND related_user_id = $2 AND status = 'pending'",
        )
        .bind(id)
        .bind(target_user_id)
        .fetch_optional(executor)
        .await
    }

    /// Record the response, guarded so each edge is answered exactly once.
    ///
    /// Returns `None` if the edge is no longer pending.
    pub async fn mark_responded<'e>(
        id: i64,
        status: RelationshipStatus,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE relationships
             SET status = $2, responded_at = now(), updated_at = now()
             WHERE id = $1 AND status = 'pending'
             RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(executor)
        .await
    }

    /// Partial update scoped to the requester
    pub async fn update_for_requester<'e>(
        id: i64,
        user_id: i64,
        changes: RelationshipChanges,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE relationships
             SET relationship_type = COALESCE($3, relationship_type),
                 relationship_name = COALESCE($4, relationship_name),
                 is_primary = COALESCE($5, is_primary),
                 privacy_level = COALESCE($6, privacy_level),
                 updated_at = now()
             WHERE id = $1 AND user_id = $2
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(&changes.relationship_type)
        .bind(&changes.relationship_name)
        .bind(changes.is_primary)
        .bind(changes.privacy_level)
        .fetch_optional(executor)
        .await
    }

    /// Delete scoped to the requester
    pub async fn delete_for_requester<'e>(
        id: i64,
        user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM relationships WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Exact-match duplicate check on (requester, target, type)
    pub async fn edge_exists<'e>(
        user_id: i64,
        related_user_id: i64,
        relationship_type: &str,
        executor: impl PgExecutor<'e>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM relationships
                WHERE user_id = $1 AND related_user_id = $2 AND relationship_type = $3
             )",
        )
        .bind(user_id)
        .bind(related_user_id)
        .bind(relationship_type)
        .fetch_one(executor)
        .await
    }
}

/// Map an edge uniqueness violation to its domain error.
pub fn map_edge_violation(err: sqlx::Error) -> ApiError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.constraint() == Some("relationships_edge_key") {
            return ApiError::DuplicateRelationship;
        }
    }

    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_defaults_to_private() {
        assert_eq!(PrivacyLevel::default(), PrivacyLevel::Private);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RelationshipStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&PrivacyLevel::Friends).unwrap(),
            "\"friends\""
        );
    }
}
