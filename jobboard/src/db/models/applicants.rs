//! Database models for applicant profiles.

use crate::types::{ApplicantProfileId, UserId};
use chrono::{DateTime, NaiveDate, Utc};

/// Database request for creating an applicant profile
#[derive(Debug, Clone)]
pub struct ApplicantCreateDBRequest {
    pub user_id: UserId,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub resume_url: String,
    pub skills: String,
    pub date_of_birth: NaiveDate,
}

/// Database request for replacing an applicant profile's fields
#[derive(Debug, Clone)]
pub struct ApplicantUpdateDBRequest {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub resume_url: String,
    pub skills: String,
    pub date_of_birth: NaiveDate,
}

/// Database response for an applicant profile
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicantDBResponse {
    pub id: ApplicantProfileId,
    /// Owning user id
    pub applicant_id: UserId,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub resume_url: String,
    pub skills: String,
    pub date_of_birth: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
