//! HTTP API: axum handlers and the request/response models they exchange.
//!
//! # API Structure
//!
//! - **Authentication** (`/authentication/*`): registration and credential checks
//! - **Job board** (`/api/v1/jobs`, `/api/v1/job-types`): public, paginated reads
//! - **Recruiter** (`/api/v1/recruiter/*`): own jobs, their applicants, job types
//! - **Applicant** (`/api/v1/applicant/*`): profile, applying, applied jobs
//!
//! The OpenAPI document is served at `/api-docs/openapi.json` with a viewer at `/docs`.

pub mod handlers;
pub mod models;
