//! Database models for job applications and the joined listing row.

use crate::api::models::job_applications::ApplicationStatus;
use crate::types::{ApplicantProfileId, ApplicationId, JobId, JobTypeId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Database request for creating a job application
#[derive(Debug, Clone)]
pub struct JobApplicationCreateDBRequest {
    pub job_id: JobId,
    /// Applying user's id (the profile key)
    pub applicant_id: UserId,
    pub application_date: DateTime<Utc>,
    pub status: ApplicationStatus,
}

/// Database response for a job application
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobApplicationDBResponse {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_id: UserId,
    pub application_date: DateTime<Utc>,
    pub status: ApplicationStatus,
}

/// One row of `jobs LEFT JOIN job_applications LEFT JOIN job_types LEFT JOIN applicants`.
///
/// Everything sourced from an outer-joined table is optional.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobWithApplicantDBResponse {
    pub job_id: JobId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Decimal,
    pub category: String,
    pub recruiter_id: UserId,
    pub job_type_id: Option<JobTypeId>,
    pub job_type_name: Option<String>,
    pub job_application_id: Option<ApplicationId>,
    pub applicant_id: Option<UserId>,
    pub application_date: Option<DateTime<Utc>>,
    pub status: Option<ApplicationStatus>,
    pub applicant_profile_id: Option<ApplicantProfileId>,
    pub applicant_name: Option<String>,
    pub applicant_phone: Option<String>,
    pub applicant_address: Option<String>,
    pub resume_url: Option<String>,
    pub skills: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}
