use crate::db::errors::{ConstraintKind, DbError};
use crate::types::{Operation, Resource};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Authentication required but not provided
    #[error("Not authenticated")]
    Unauthenticated { message: Option<String> },

    /// Caller has the wrong role, or does not own the entity being changed
    #[error("Insufficient permissions to {action:?} {resource}")]
    InsufficientPermissions { action: Operation, resource: Resource },

    /// Invalid request data or business rule violation
    #[error("{message}")]
    BadRequest { message: String },

    /// Requested resource not found
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: String, id: String },

    /// Generic internal service error
    #[error("Failed to {operation}")]
    Internal { operation: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Error::InsufficientPermissions { .. } => StatusCode::FORBIDDEN,
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(db_err) => match db_err {
                DbError::NotFound | DbError::UnknownJob => StatusCode::NOT_FOUND,
                DbError::EmailTaken | DbError::ProfileExists => StatusCode::CONFLICT,
                DbError::ProfileRequired | DbError::UnknownJobType => StatusCode::BAD_REQUEST,
                DbError::Constraint {
                    kind: ConstraintKind::Unique,
                    ..
                } => StatusCode::CONFLICT,
                DbError::Constraint { .. } => StatusCode::BAD_REQUEST,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::Unauthenticated { message } => message.clone().unwrap_or_else(|| "Authentication required".to_string()),
            Error::InsufficientPermissions { action, resource } => {
                format!("Insufficient permissions to {action} {resource}")
            }
            Error::BadRequest { message } => message.clone(),
            Error::NotFound { resource, id } => {
                format!("{resource} with ID {id} not found")
            }
            Error::Internal { .. } => "Internal server error".to_string(),
            Error::Database(db_err) => match db_err {
                DbError::NotFound => "Resource not found".to_string(),
                DbError::EmailTaken => "An account with this email address already exists".to_string(),
                DbError::ProfileExists => "An applicant profile already exists for this user".to_string(),
                DbError::ProfileRequired => "Please fill profile first".to_string(),
                DbError::UnknownJob => "Job not found".to_string(),
                DbError::UnknownJobType => "Job type not found".to_string(),
                DbError::Constraint { kind, .. } => match kind {
                    ConstraintKind::Unique => "Resource already exists".to_string(),
                    ConstraintKind::ForeignKey => "Invalid reference to related resource".to_string(),
                    ConstraintKind::Check => "Invalid data provided".to_string(),
                },
                DbError::Other(_) => "Database error occurred".to_string(),
            },
            Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Internal { .. } | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::Unauthenticated { .. } | Error::InsufficientPermissions { .. } => {
                tracing::info!("Authorization error: {}", self);
            }
            Error::BadRequest { .. } | Error::NotFound { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();

        match &self {
            Error::Database(db_err @ (DbError::EmailTaken | DbError::ProfileExists)) => {
                let resource = match db_err {
                    DbError::EmailTaken => "user",
                    _ => "applicant",
                };
                let body = serde_json::json!({
                    "message": self.user_message(),
                    "resource": resource
                });
                (status, axum::response::Json(body)).into_response()
            }
            _ => (status, self.user_message()).into_response(),
        }
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_and_missing_are_distinct() {
        let forbidden = Error::InsufficientPermissions {
            action: Operation::UpdateOwn,
            resource: Resource::Jobs,
        };
        let missing = Error::NotFound {
            resource: "Job".to_string(),
            id: "42".to_string(),
        };

        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(forbidden.user_message(), "Insufficient permissions to Update jobs");
        assert_eq!(missing.user_message(), "Job with ID 42 not found");
    }

    #[test]
    fn test_database_errors_hide_internals() {
        let err = Error::Database(DbError::Other(anyhow::anyhow!("connection reset by peer")));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "Database error occurred");

        let err = Error::Database(DbError::EmailTaken);
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.user_message(), "An account with this email address already exists");

        let err = Error::Database(DbError::Constraint {
            kind: ConstraintKind::Check,
            constraint: Some("jobs_salary_non_negative".to_string()),
            table: Some("jobs".to_string()),
            message: "new row violates check constraint".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Invalid data provided");
    }

    #[test]
    fn test_application_constraint_errors_match_service_checks() {
        let err = Error::Database(DbError::ProfileRequired);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Please fill profile first");

        let err = Error::Database(DbError::UnknownJob);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = Error::Database(DbError::ProfileExists);
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.user_message(), "An applicant profile already exists for this user");
    }
}
