use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Domain error taxonomy for the Forever N Co. platform.
///
/// Every variant maps to a stable machine-readable `error` kind and an HTTP
/// status; handlers return `Result<_, ApiError>` and let the taxonomy decide
/// the wire representation.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Could not validate credentials")]
    InvalidCredential,

    #[error("Phone number not found in Firebase token")]
    MissingPhoneClaim,

    /// Identity resolution found no user for a verified credential.
    #[error("User not found. Please complete signup first.")]
    IdentityNotFound,

    #[error("User account is inactive")]
    UserInactive,

    /// The token endpoint requires a completed signup.
    #[error("User not found. Please complete signup first.")]
    SignupRequired,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("A user with this phone number already exists")]
    DuplicatePhone,

    #[error("A user with this Firebase account already exists")]
    DuplicateFirebaseUid,

    #[error("A user with this email already exists")]
    DuplicateEmail,

    #[error("Relationship already exists")]
    DuplicateRelationship,

    #[error("Relationship request has expired")]
    RequestExpired,

    #[error("Reviews service is not configured")]
    ReviewsUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredential => "invalid_credential",
            Self::MissingPhoneClaim => "missing_phone_claim",
            Self::IdentityNotFound => "user_not_found",
            Self::UserInactive => "user_inactive",
            Self::SignupRequired => "user_not_found",
            Self::NotFound(_) => "not_found",
            Self::DuplicatePhone => "duplicate_phone",
            Self::DuplicateFirebaseUid => "duplicate_firebase_uid",
            Self::DuplicateEmail => "duplicate_email",
            Self::DuplicateRelationship => "duplicate_relationship",
            Self::RequestExpired => "request_expired",
            Self::ReviewsUnavailable => "reviews_unavailable",
            Self::Database(_) => "database_error",
            Self::Internal(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCredential | Self::IdentityNotFound | Self::UserInactive => {
                StatusCode::UNAUTHORIZED
            }
            Self::MissingPhoneClaim | Self::DuplicateRelationship | Self::RequestExpired => {
                StatusCode::BAD_REQUEST
            }
            Self::SignupRequired | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicatePhone | Self::DuplicateFirebaseUid | Self::DuplicateEmail => {
                StatusCode::CONFLICT
            }
            Self::ReviewsUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal failures are logged with full context; callers only see
        // the generic kind and detail.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": self.kind(),
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_failures_are_unauthorized() {
        assert_eq!(ApiError::InvalidCredential.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::IdentityNotFound.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::UserInactive.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn uniqueness_conflicts_map_to_conflict() {
        assert_eq!(ApiError::DuplicatePhone.status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::DuplicateFirebaseUid.status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::DuplicateEmail.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn relationship_errors_keep_source_statuses() {
        assert_eq!(
            ApiError::DuplicateRelationship.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::RequestExpired.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::NotFound("Relationship").status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn kinds_are_stable() {
        assert_eq!(ApiError::InvalidCredential.kind(), "invalid_credential");
        assert_eq!(ApiError::MissingPhoneClaim.kind(), "missing_phone_claim");
        assert_eq!(ApiError::SignupRequired.kind(), "user_not_found");
        assert_eq!(ApiError::DuplicatePhone.kind(), "duplicate_phone");
    }

    #[test]
    fn token_endpoint_signup_requirement_is_not_found() {
        assert_eq!(ApiError::SignupRequired.status(), StatusCode::NOT_FOUND);
    }
}
