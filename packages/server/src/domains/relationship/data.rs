use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::relationship::models::{PrivacyLevel, Relationship, RelationshipStatus};

fn default_true() -> bool {
    true
}

/// Payload for a new relationship request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRelationshipRequest {
    pub related_user_id: i64,
    pub relationship_type: String,
    pub relationship_name: String,
    #[serde(default = "default_true")]
    pub is_primary: bool,
    #[serde(default)]
    pub privacy_level: PrivacyLevel,
}

/// Requester-side edit of a relationship's descriptive fields.
///
/// Lifecycle state is excluded: status only changes through the target's
/// respond action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRelationshipRequest {
    pub relationship_type: Option<String>,
    pub relationship_name: Option<String>,
    pub is_primary: Option<bool>,
    pub privacy_level: Option<PrivacyLevel>,
}

/// Body of `POST /relationships/{id}/respond`.
#[derive(Debug, Clone, Deserialize)]
pub struct RespondRequest {
    pub accept: bool,
}

/// Public API representation of a relationship edge.
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipResponse {
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
}

impl From<Relationship> for RelationshipResponse {
    fn from(edge: Relationship) -> Self {
        Self {
            id: edge.id,
            user_id: edge.user_id,
            related_user_id: edge.related_user_id,
            relationship_type: edge.relationship_type,
            relationship_name: edge.relationship_name,
            is_primary: edge.is_primary,
            privacy_level: edge.privacy_level,
            status: edge.status,
            requested_at: edge.requested_at,
            responded_at: edge.responded_at,
            expires_at: edge.expires_at,
            created_at: edge.created_at,
        }
    }
}
