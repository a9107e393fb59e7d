use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

/// Guest model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Guest {
    pub id: i64,
    pub user_id: i64,
    pub wedding_id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub relation: Option<String>,
    pub category: String,
    pub confirmation_status: String,
    pub invitation_sent: bool,
    pub invitation_sent_at: Option<DateTime<Utc>>,
    pub response_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewGuest {
    pub user_id: i64,
    pub wedding_id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub relation: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, Default)]
pub struct GuestChanges {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub relation: Option<String>,
    pub category: Option<String>,
    pub confirmation_status: Option<String>,
    pub notes: Option<String>,
}

impl Guest {
    pub async fn insert<'e>(
        new_guest: NewGuest,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO guests (user_id, wedding_id, name, phone_number, email, relation, category)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(new_guest.user_id)
        .bind(new_guest.wedding_id)
        .bind(&new_guest.name)
        .bind(&new_guest.phone_number)
        .bind(&new_guest.email)
        .bind(&new_guest.relation)
        .bind(&new_guest.category)
        .fetch_one(executor)
        .await
    }

    pub async fn find_for_wedding<'e>(
        user_id: i64,
        wedding_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM guests
             WHERE user_id = $1 AND wedding_id = $2
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(wedding_id)
        .fetch_all(executor)
        .await
    }

    pub async fn find_by_id_for_user<'e>(
        id: i64,
        user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM guests WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(executor)
            .await
    }

    pub async fn update_for_user<'e>(
        id: i64,
        user_id: i64,
        changes: GuestChanges,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE guests
             SET name = COALESCE($3, name),
                 phone_number = COALESCE($4, phone_number),
                 email = COALESCE($5, email),
                 relation = COALESCE($6, relation),
                 category = COALESCE($7, category),
                 confirmation_status = COALESCE($8, confirmation_status),
                 notes = COALESCE($9, notes),
                 updated_at = now()
             WHERE id = $1 AND user_id = $2
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(&changes.name)
        .bind(&changes.phone_number)
        .bind(&changes.email)
        .bind(&changes.relation)
        .bind(&changes.category)
        .bind(&changes.confirmation_status)
        .bind(&changes.notes)
        .fetch_optional(executor)
        .await
    }

    pub async fn delete_for_user<'e>(
        id: i64,
        user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Record that an invitation went out.
    pub async fn mark_invited<'e>(
        id: i64,
        user_id: i64,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE guests
             SET invitation_sent = true, invitation_sent_at = now(), updated_at = now()
             WHERE id = $1 AND user_id = $2
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(executor)
        .await
    }
}
