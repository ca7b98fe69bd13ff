//! API request/response models for job types.

use super::{optional_text, required_text};
use crate::db::models::job_types::{JobTypeCreateDBRequest, JobTypeDBResponse, JobTypeUpdateDBRequest};
use crate::errors::Result;
use crate::types::JobTypeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Query parameters for the job type lookup list
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListJobTypesQuery {
    /// Case-insensitive substring match on the name
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobTypeCreate {
    #[schema(example = "Full-time")]
    pub name: String,
    #[schema(example = "Permanent, 40 hours per week")]
    pub description: String,
}

impl JobTypeCreate {
    pub fn into_db_request(self) -> Result<JobTypeCreateDBRequest> {
        Ok(JobTypeCreateDBRequest {
            name: required_text("Name", &self.name, NAME_MAX_LEN)?,
            description: required_text("Description", &self.description, DESCRIPTION_MAX_LEN)?,
        })
    }
}

/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct JobTypeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl JobTypeUpdate {
    pub fn into_db_request(self) -> Result<JobTypeUpdateDBRequest> {
        Ok(JobTypeUpdateDBRequest {
            name: optional_text("Name", self.name.as_deref(), NAME_MAX_LEN)?,
            description: optional_text("Description", self.description.as_deref(), DESCRIPTION_MAX_LEN)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobTypeResponse {
    pub id: JobTypeId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobTypeDBResponse> for JobTypeResponse {
    fn from(db: JobTypeDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
