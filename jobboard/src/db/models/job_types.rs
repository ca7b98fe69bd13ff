//! Database models for job types.

use crate::types::JobTypeId;
use chrono::{DateTime, Utc};

/// Database request for creating a new job type
#[derive(Debug, Clone)]
pub struct JobTypeCreateDBRequest {
    pub name: String,
    pub description: String,
}

/// Database request for updating a job type
#[derive(Debug, Clone, Default)]
pub struct JobTypeUpdateDBRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Database response for a job type
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobTypeDBResponse {
    pub id: JobTypeId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
