//! Recruiter endpoints: job postings, the applicants to them, and job type management.
//!
//! Every handler takes [`RequiresRecruiter`], so applicants get 403 and unknown callers 401
//! before any work is done. Job level ownership is checked in the service.

use crate::{
    AppState,
    api::models::{
        job_applications::{JobApplicationResponse, JobWithApplicantResponse, ListJobApplicantsQuery, UpdateStatusRequest},
        job_types::{JobTypeCreate, JobTypeResponse, JobTypeUpdate},
        jobs::{JobCreate, JobResponse, JobUpdate, ListMyJobsQuery},
        pagination::Page,
    },
    auth::current_user::RequiresRecruiter,
    errors::Result,
    services::{PgRecruiterService, RecruiterService},
    types::{ApplicationId, JobId, JobTypeId},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/recruiter/jobs",
    tag = "recruiter",
    summary = "List my jobs",
    params(ListMyJobsQuery),
    responses(
        (status = 200, description = "Every job posted by the caller, newest first", body = Vec<JobResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not a recruiter"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_my_jobs(
    State(state): State<AppState>,
    RequiresRecruiter(user): RequiresRecruiter,
    Query(query): Query<ListMyJobsQuery>,
) -> Result<Json<Vec<JobResponse>>> {
    let jobs = PgRecruiterService::new(state.db).list_my_jobs(user.id, &query.search()).await?;
    Ok(Json(jobs))
}

#[utoipa::path(
    post,
    path = "/recruiter/jobs",
    tag = "recruiter",
    summary = "Post a job",
    request_body = JobCreate,
    responses(
        (status = 201, description = "Job created", body = JobResponse),
        (status = 400, description = "Invalid job fields"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not a recruiter"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn create_job(
    State(state): State<AppState>,
    RequiresRecruiter(user): RequiresRecruiter,
    Json(job): Json<JobCreate>,
) -> Result<(StatusCode, Json<JobResponse>)> {
    let job = PgRecruiterService::new(state.db).create_job(user.id, job).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

#[utoipa::path(
    patch,
    path = "/recruiter/jobs/{id}",
    tag = "recruiter",
    summary = "Edit a job",
    request_body = JobUpdate,
    params(("id" = i64, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job updated", body = JobResponse),
        (status = 400, description = "Invalid job fields"),
        (status = 403, description = "Job belongs to another recruiter"),
        (status = 404, description = "Job not found"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_job(
    State(state): State<AppState>,
    RequiresRecruiter(user): RequiresRecruiter,
    Path(id): Path<JobId>,
    Json(update): Json<JobUpdate>,
) -> Result<Json<JobResponse>> {
    let job = PgRecruiterService::new(state.db).update_job(user.id, id, update).await?;
    Ok(Json(job))
}

#[utoipa::path(
    delete,
    path = "/recruiter/jobs/{id}",
    tag = "recruiter",
    summary = "Delete a job",
    params(("id" = i64, Path, description = "Job ID")),
    responses(
        (status = 204, description = "Job and its applications deleted"),
        (status = 403, description = "Job belongs to another recruiter"),
        (status = 404, description = "Job not found"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_job(
    State(state): State<AppState>,
    RequiresRecruiter(user): RequiresRecruiter,
    Path(id): Path<JobId>,
) -> Result<StatusCode> {
    PgRecruiterService::new(state.db).delete_job(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Applications to one of the caller's jobs, joined with each applicant's profile
#[utoipa::path(
    get,
    path = "/recruiter/jobs/{id}/applicants",
    tag = "recruiter",
    summary = "List applicants for a job",
    params(("id" = i64, Path, description = "Job ID"), ListJobApplicantsQuery),
    responses(
        (status = 200, description = "One page of applications, most recent first", body = Page<JobWithApplicantResponse>),
        (status = 403, description = "Job belongs to another recruiter"),
        (status = 404, description = "Job not found"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_job_applicants(
    State(state): State<AppState>,
    RequiresRecruiter(user): RequiresRecruiter,
    Path(id): Path<JobId>,
    Query(query): Query<ListJobApplicantsQuery>,
) -> Result<Json<Page<JobWithApplicantResponse>>> {
    let page = PgRecruiterService::new(state.db)
        .list_job_applicants(user.id, id, &query.pagination)
        .await?;
    Ok(Json(page))
}

#[utoipa::path(
    patch,
    path = "/recruiter/applications/{id}",
    tag = "recruiter",
    summary = "Set application status",
    request_body = UpdateStatusRequest,
    params(("id" = i64, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Status updated", body = JobApplicationResponse),
        (status = 403, description = "Application is for another recruiter's job"),
        (status = 404, description = "Application not found"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_application_status(
    State(state): State<AppState>,
    RequiresRecruiter(user): RequiresRecruiter,
    Path(id): Path<ApplicationId>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<JobApplicationResponse>> {
    let application = PgRecruiterService::new(state.db)
        .update_application_status(user.id, id, request.status)
        .await?;
    Ok(Json(application))
}

#[utoipa::path(
    post,
    path = "/recruiter/job-types",
    tag = "recruiter",
    summary = "Create a job type",
    request_body = JobTypeCreate,
    responses(
        (status = 201, description = "Job type created", body = JobTypeResponse),
        (status = 400, description = "Invalid job type fields"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn create_job_type(
    State(state): State<AppState>,
    RequiresRecruiter(_recruiter): RequiresRecruiter,
    Json(job_type): Json<JobTypeCreate>,
) -> Result<(StatusCode, Json<JobTypeResponse>)> {
    let job_type = PgRecruiterService::new(state.db).create_job_type(job_type).await?;
    Ok((StatusCode::CREATED, Json(job_type)))
}

#[utoipa::path(
    patch,
    path = "/recruiter/job-types/{id}",
    tag = "recruiter",
    summary = "Edit a job type",
    request_body = JobTypeUpdate,
    params(("id" = i64, Path, description = "Job type ID")),
    responses(
        (status = 200, description = "Job type updated", body = JobTypeResponse),
        (status = 404, description = "Job type not found"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_job_type(
    State(state): State<AppState>,
    RequiresRecruiter(_recruiter): RequiresRecruiter,
    Path(id): Path<JobTypeId>,
    Json(update): Json<JobTypeUpdate>,
) -> Result<Json<JobTypeResponse>> {
    let job_type = PgRecruiterService::new(state.db).update_job_type(id, update).await?;
    Ok(Json(job_type))
}

#[utoipa::path(
    delete,
    path = "/recruiter/job-types/{id}",
    tag = "recruiter",
    summary = "Delete a job type",
    params(("id" = i64, Path, description = "Job type ID")),
    responses(
        (status = 204, description = "Job type deleted; linked jobs keep their category"),
        (status = 404, description = "Job type not found"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_job_type(
    State(state): State<AppState>,
    RequiresRecruiter(_recruiter): RequiresRecruiter,
    Path(id): Path<JobTypeId>,
) -> Result<StatusCode> {
    PgRecruiterService::new(state.db).delete_job_type(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
