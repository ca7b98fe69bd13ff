use thiserror::Error;

/// Unified error type for database operations that application code can handle.
///
/// Constraint violations the schema names are classified into domain variants, so services
/// and the HTTP layer never match on constraint strings.
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found by the given identifier
    #[error("Entity not found")]
    NotFound,

    /// `users_email_unique`
    #[error("Email address already registered")]
    EmailTaken,

    /// `applicants_applicant_id_unique`
    #[error("Applicant profile already exists")]
    ProfileExists,

    /// `job_applications_applicant_id_fkey`: the applicant has no profile row
    #[error("Applicant profile required")]
    ProfileRequired,

    /// `job_applications_job_id_fkey`
    #[error("Referenced job does not exist")]
    UnknownJob,

    /// `jobs_job_type_id_fkey`
    #[error("Referenced job type does not exist")]
    UnknownJobType,

    /// Any other unique, foreign key or check violation
    #[error("{kind:?} constraint violation")]
    Constraint {
        kind: ConstraintKind,
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Catch-all for non-recoverable errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Check,
}

impl DbError {
    fn from_constraint(kind: ConstraintKind, db_err: &dyn sqlx::error::DatabaseError) -> Self {
        match db_err.constraint() {
            Some("users_email_unique") => DbError::EmailTaken,
            Some("applicants_applicant_id_unique") => DbError::ProfileExists,
            Some("job_applications_applicant_id_fkey") => DbError::ProfileRequired,
            Some("job_applications_job_id_fkey") => DbError::UnknownJob,
            Some("jobs_job_type_id_fkey") => DbError::UnknownJobType,
            constraint => DbError::Constraint {
                kind,
                constraint: constraint.map(|s| s.to_string()),
                table: db_err.table().map(|s| s.to_string()),
                message: db_err.message().to_string(),
            },
        }
    }
}

/// Convert from sqlx::Error using proper sqlx error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err) => {
                let kind = if db_err.is_unique_violation() {
                    ConstraintKind::Unique
                } else if db_err.is_foreign_key_violation() {
                    ConstraintKind::ForeignKey
                } else if db_err.is_check_violation() {
                    ConstraintKind::Check
                } else {
                    // All other database errors are non-recoverable
                    return DbError::Other(anyhow::Error::from(err));
                };
                DbError::from_constraint(kind, db_err.as_ref())
            }
            _ => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;
