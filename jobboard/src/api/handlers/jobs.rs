use crate::{
    AppState,
    api::models::{
        job_types::{JobTypeResponse, ListJobTypesQuery},
        jobs::{JobResponse, ListJobsQuery},
        pagination::Page,
    },
    errors::Result,
    services::{JobBoardService, PgJobBoardService},
    types::{JobId, JobTypeId},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

/// List all open jobs
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "jobs",
    summary = "List jobs",
    params(ListJobsQuery),
    responses(
        (status = 200, description = "One page of jobs, newest first", body = Page<JobResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_jobs(State(state): State<AppState>, Query(query): Query<ListJobsQuery>) -> Result<Json<Page<JobResponse>>> {
    let page = PgJobBoardService::new(state.db).list_jobs(&query).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = "jobs",
    summary = "Get job",
    params(("id" = i64, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job details", body = JobResponse),
        (status = 404, description = "Job not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_job(State(state): State<AppState>, Path(id): Path<JobId>) -> Result<Json<JobResponse>> {
    let job = PgJobBoardService::new(state.db).get_job(id).await?;
    Ok(Json(job))
}

#[utoipa::path(
    get,
    path = "/job-types",
    tag = "job types",
    summary = "List job types",
    params(ListJobTypesQuery),
    responses(
        (status = 200, description = "All job types, newest first", body = Vec<JobTypeResponse>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_job_types(
    State(state): State<AppState>,
    Query(query): Query<ListJobTypesQuery>,
) -> Result<Json<Vec<JobTypeResponse>>> {
    let job_types = PgJobBoardService::new(state.db).list_job_types(&query).await?;
    Ok(Json(job_types))
}

#[utoipa::path(
    get,
    path = "/job-types/{id}",
    tag = "job types",
    summary = "Get job type",
    params(("id" = i64, Path, description = "Job type ID")),
    responses(
        (status = 200, description = "Job type details", body = JobTypeResponse),
        (status = 404, description = "Job type not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_job_type(State(state): State<AppState>, Path(id): Path<JobTypeId>) -> Result<Json<JobTypeResponse>> {
    let job_type = PgJobBoardService::new(state.db).get_job_type(id).await?;
    Ok(Json(job_type))
}
