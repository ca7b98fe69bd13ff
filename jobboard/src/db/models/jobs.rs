//! Database models for job postings.

use crate::types::{JobId, JobTypeId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Database request for creating a new job
#[derive(Debug, Clone)]
pub struct JobCreateDBRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Decimal,
    pub category: String,
    pub job_type_id: Option<JobTypeId>,
    pub recruiter_id: UserId,
}

/// Database request for updating a job. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct JobUpdateDBRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary: Option<Decimal>,
    pub category: Option<String>,
    pub job_type_id: Option<JobTypeId>,
}

/// Database response for a job
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobDBResponse {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Decimal,
    pub category: String,
    pub job_type_id: Option<JobTypeId>,
    /// Name of the legacy job type, if one is still linked
    pub job_type_name: Option<String>,
    pub recruiter_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
