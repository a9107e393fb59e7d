use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

use crate::common::ApiError;

/// User model - SQL persistence layer
///
/// Phone number is the external identity key (exact string equality; callers
/// canonicalize before storage). `firebase_uid` and `email` are unique when
/// present. Rows are never deleted, only deactivated.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: i64,
    pub phone_number: String,
    pub firebase_uid: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub locality: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for a new user row.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub phone_number: String,
    pub firebase_uid: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub locality: Option<String>,
    pub is_verified: bool,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub locality: Option<String>,
    pub firebase_uid: Option<String>,
    pub is_verified: Option<bool>,
}

impl User {
    /// Find user by internal id
    pub async fn find_by_id<'e>(
        id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find user by phone number (exact match)
    pub async fn find_by_phone<'e>(
        phone_number: &str,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE phone_number = $1")
            .bind(phone_number)
            .fetch_optional(executor)
            .await
    }

    /// Find user by Firebase UID
    pub async fn find_by_firebase_uid<'e>(
        firebase_uid: &str,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE firebase_uid = $1")
            .bind(firebase_uid)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new user row
    pub async fn insert<'e>(
        new_user: NewUser,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (phone_number, firebase_uid, name, email, locality, is_verified)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&new_user.phone_number)
        .bind(&new_user.firebase_uid)
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.locality)
        .bind(new_user.is_verified)
        .fetch_one(executor)
        .await
    }

    /// Apply a partial update; absent fields keep their stored value.
    ///
    /// Returns `None` if the id does not exist.
    pub async fn update<'e>(
        id: i64,
        changes: UserChanges,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE users
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 locality = COALESCE($4, locality),
                 firebase_uid = COALESCE($5, firebase_uid),
                 is_verified = COALESCE($6, is_verified),
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.locality)
        .bind(&changes.firebase_uid)
        .bind(changes.is_verified)
        .fetch_optional(executor)
        .await
    }

    /// Logical deletion. Idempotent: true whenever the id exists.
    pub async fn deactivate<'e>(
        id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET is_active = false, updated_at = now() WHERE id = $1")
                .bind(id)
                .execute(executor)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Map a users-table uniqueness violation to its domain error.
///
/// Postgres reports the violated constraint by name; anything else passes
/// through as a database error.
pub fn map_unique_violation(err: sqlx::Error) -> ApiError {
    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.constraint() {
            Some("users_phone_number_key") => return ApiError::DuplicatePhone,
            Some("users_firebase_uid_key") => return ApiError::DuplicateFirebaseUid,
            Some("users_email_key") => return ApiError::DuplicateEmail,
            _ => {}
        }
    }

    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_struct() {
        // Just verify struct defaults line up with the schema
        let user = User {
            id: 1,
            phone_number: "+15550001111".to_string(),
            firebase_uid: Some("firebase-uid-1".to_string()),
            name: Some("Ann".to_string()),
            email: None,
            locality: Some("Mumbai".to_string()),
            is_active: true,
            is_verified: true,
            created_at: Utc::now(),
            updated_at: None,
        };

        assert!(user.is_active);
        assert!(user.email.is_none());
    }

    #[test]
    fn non_constraint_errors_pass_through() {
        let err = map_unique_violation(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::Database(_)));
    }
}
