//! API request/response models for job applications.

use super::pagination::Pagination;
use crate::db::handlers::filters::JobSearch;
use crate::db::models::job_applications::{JobApplicationDBResponse, JobWithApplicantDBResponse};
use crate::types::{ApplicantProfileId, ApplicationId, JobId, JobTypeId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Review state of an application. New applications start `IN_REVIEW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "application_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    InReview,
    Rejected,
    Accepted,
}

/// Query parameters for the applied-jobs listing
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListAppliedJobsQuery {
    /// Pagination parameters
    #[serde(flatten)]
    #[param(inline)]
    pub pagination: Pagination,

    /// Case-insensitive substring match on the job title
    pub title: Option<String>,

    /// Case-insensitive substring match on the job location
    pub location: Option<String>,
}

impl ListAppliedJobsQuery {
    pub fn search(&self) -> JobSearch {
        JobSearch::new(self.title.clone(), self.location.clone())
    }
}

/// Query parameters for a job's applicant listing
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListJobApplicantsQuery {
    #[serde(flatten)]
    #[param(inline)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplyRequest {
    pub job_id: JobId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobApplicationResponse {
    pub id: ApplicationId,
    pub job_id: JobId,
    /// Applying user
    pub applicant_id: UserId,
    pub application_date: DateTime<Utc>,
    pub status: ApplicationStatus,
}

impl From<JobApplicationDBResponse> for JobApplicationResponse {
    fn from(db: JobApplicationDBResponse) -> Self {
        Self {
            id: db.id,
            job_id: db.job_id,
            applicant_id: db.applicant_id,
            application_date: db.application_date,
            status: db.status,
        }
    }
}

/// A job together with one application to it and the applicant's profile.
///
/// Application, applicant and job type fields come from outer joins and are
/// absent when there is nothing to join.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobWithApplicantResponse {
    pub job_id: JobId,
    pub title: String,
    pub description: String,
    pub location: String,
    #[schema(value_type = String)]
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

impl From<JobWithApplicantDBResponse> for JobWithApplicantResponse {
    fn from(db: JobWithApplicantDBResponse) -> Self {
        Self {
            job_id: db.job_id,
            title: db.title,
            description: db.description,
            location: db.location,
            salary: db.salary,
            category: db.category,
            recruiter_id: db.recruiter_id,
            job_type_id: db.job_type_id,
            job_type_name: db.job_type_name,
            job_application_id: db.job_application_id,
            applicant_id: db.applicant_id,
            application_date: db.application_date,
            status: db.status,
            applicant_profile_id: db.applicant_profile_id,
            applicant_name: db.applicant_name,
            applicant_phone: db.applicant_phone,
            applicant_address: db.applicant_address,
            resume_url: db.resume_url,
            skills: db.skills,
            date_of_birth: db.date_of_birth,
        }
    }
}
