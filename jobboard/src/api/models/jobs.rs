//! API request/response models for job postings.

use super::pagination::Pagination;
use super::{optional_text, required_text};
use crate::db::handlers::filters::JobSearch;
use crate::db::models::jobs::{JobCreateDBRequest, JobDBResponse, JobUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::{JobId, JobTypeId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const LOCATION_MAX_LEN: usize = 100;
pub const CATEGORY_MAX_LEN: usize = 100;

/// Query parameters for job listings
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListJobsQuery {
    /// Pagination parameters
    #[serde(flatten)]
    #[param(inline)]
    pub pagination: Pagination,

    /// Case-insensitive substring match on the job title
    pub title: Option<String>,

    /// Case-insensitive substring match on the job location
    pub location: Option<String>,
}

impl ListJobsQuery {
    pub fn search(&self) -> JobSearch {
        JobSearch::new(self.title.clone(), self.location.clone())
    }
}

/// Query parameters for a recruiter's own jobs. The list is not paginated.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListMyJobsQuery {
    pub title: Option<String>,
    pub location: Option<String>,
}

impl ListMyJobsQuery {
    pub fn search(&self) -> JobSearch {
        JobSearch::new(self.title.clone(), self.location.clone())
    }
}

/// Request body for posting a job.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobCreate {
    #[schema(example = "Backend Developer")]
    pub title: String,
    #[schema(example = "Build and run our Rust services")]
    pub description: String,
    #[schema(example = "Remote")]
    pub location: String,
    #[schema(value_type = String, example = "85000.00")]
    pub salary: Decimal,
    /// Free-text category shown on the board
    #[schema(example = "Engineering")]
    pub category: String,
    /// Optional legacy job type link
    pub job_type_id: Option<JobTypeId>,
}

impl JobCreate {
    /// Validate and attach the posting recruiter.
    pub fn into_db_request(self, recruiter_id: UserId) -> Result<JobCreateDBRequest> {
        Ok(JobCreateDBRequest {
            title: required_text("Title", &self.title, TITLE_MAX_LEN)?,
            description: required_text("Description", &self.description, DESCRIPTION_MAX_LEN)?,
            location: required_text("Location", &self.location, LOCATION_MAX_LEN)?,
            salary: validate_salary(self.salary)?,
            category: required_text("Category", &self.category, CATEGORY_MAX_LEN)?,
            job_type_id: self.job_type_id,
            recruiter_id,
        })
    }
}

/// Request body for editing a job. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[schema(value_type = Option<String>, example = "90000.00")]
    pub salary: Option<Decimal>,
    pub category: Option<String>,
    pub job_type_id: Option<JobTypeId>,
}

impl JobUpdate {
    pub fn into_db_request(self) -> Result<JobUpdateDBRequest> {
        Ok(JobUpdateDBRequest {
            title: optional_text("Title", self.title.as_deref(), TITLE_MAX_LEN)?,
            description: optional_text("Description", self.description.as_deref(), DESCRIPTION_MAX_LEN)?,
            location: optional_text("Location", self.location.as_deref(), LOCATION_MAX_LEN)?,
            salary: self.salary.map(validate_salary).transpose()?,
            category: optional_text("Category", self.category.as_deref(), CATEGORY_MAX_LEN)?,
            job_type_id: self.job_type_id,
        })
    }
}

fn validate_salary(salary: Decimal) -> Result<Decimal> {
    if salary.is_sign_negative() {
        return Err(Error::BadRequest {
            message: "Salary cannot be negative".to_string(),
        });
    }
    // NUMERIC(18, 2)
    let salary = salary.round_dp(2);
    if salary >= Decimal::new(10_i64.pow(16), 0) {
        return Err(Error::BadRequest {
            message: "Salary is too large".to_string(),
        });
    }
    Ok(salary)
}

/// A job posting as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobResponse {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub location: String,
    #[schema(value_type = String)]
    pub salary: Decimal,
    pub category: String,
    pub job_type_id: Option<JobTypeId>,
    /// Name of the linked legacy job type
    pub job_type_name: Option<String>,
    pub recruiter_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobDBResponse> for JobResponse {
    fn from(db: JobDBResponse) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
            location: db.location,
            salary: db.salary,
            category: db.category,
            job_type_id: db.job_type_id,
            job_type_name: db.job_type_name,
            recruiter_id: db.recruiter_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
