use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::guest::models::Guest;

fn default_category() -> String {
    "Family".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGuestRequest {
    pub wedding_id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub relation: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGuestRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub relation: Option<String>,
    pub category: Option<String>,
    pub confirmation_status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuestResponse {
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
}

impl From<Guest> for GuestResponse {
    fn from(guest: Guest) -> Self {
        Self {
            id: guest.id,
            user_id: guest.user_id,
            wedding_id: guest.wedding_id,
            name: guest.name,
            phone_number: guest.phone_number,
            email: guest.email,
            relation: guest.relation,
            category: guest.category,
            confirmation_status: guest.confirmation_status,
            invitation_sent: guest.invitation_sent,
            invitation_sent_at: guest.invitation_sent_at,
            response_at: guest.response_at,
            notes: guest.notes,
            created_at: guest.created_at,
        }
    }
}

/// Headcount rollup for a wedding's guest list.
#[derive(Debug, Clone, Serialize)]
pub struct GuestStatistics {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub declined: usize,
    pub invitations_sent: usize,
}

impl GuestStatistics {
    pub fn of(guests: &[Guest]) -> Self {
        let by_status =
            |status: &str| guests.iter().filter(|g| g.confirmation_status == status).count();

        Self {
            total: guests.len(),
            confirmed: by_status("confirmed"),
            pending: by_status("pending"),
            declined: by_status("declined"),
            invitations_sent: guests.iter().filter(|g| g.invitation_sent).count(),
        }
    }
}
