use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::user::models::User;

/// Public API representation of a user.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub phone_number: String,
    pub firebase_uid: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub locality: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            phone_number: user.phone_number,
            firebase_uid: user.firebase_uid,
            name: user.name,
            email: user.email,
            locality: user.locality,
            is_active: user.is_active,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}

/// Profile edit payload for `PUT /users/me`.
///
/// Identity fields (phone, firebase_uid, verification) are owned by the
/// signup reconciliation and cannot be edited here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub locality: Option<String>,
}
