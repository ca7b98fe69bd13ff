//! Recruiter operations: own job postings, their applicants, and the job type list.
//!
//! Job mutations lock the row (`FOR UPDATE`) and compare its recruiter with the caller inside
//! the same transaction. A job owned by someone else is refused with
//! [`Error::InsufficientPermissions`], a missing one with [`Error::NotFound`].

use crate::{
    api::models::{
        job_applications::{ApplicationStatus, JobApplicationResponse, JobWithApplicantResponse},
        job_types::{JobTypeCreate, JobTypeResponse, JobTypeUpdate},
        jobs::{JobCreate, JobResponse, JobUpdate},
        pagination::{Page, Pagination},
    },
    db::{
        self,
        handlers::{JobApplicationFilter, JobApplications, JobFilter, JobTypes, Jobs, filters::JobSearch},
        models::jobs::JobDBResponse,
    },
    errors::{Error, Result},
    types::{ApplicationId, JobId, JobTypeId, Operation, Resource, UserId},
};
use sqlx::PgPool;
use tracing::instrument;

#[async_trait::async_trait]
pub trait RecruiterService: Send + Sync {
    /// All jobs posted by the recruiter, newest first.
    async fn list_my_jobs(&self, recruiter_id: UserId, search: &JobSearch) -> Result<Vec<JobResponse>>;

    async fn create_job(&self, recruiter_id: UserId, job: JobCreate) -> Result<JobResponse>;

    async fn update_job(&self, recruiter_id: UserId, job_id: JobId, update: JobUpdate) -> Result<JobResponse>;

    async fn delete_job(&self, recruiter_id: UserId, job_id: JobId) -> Result<()>;

    /// Applications received by one of the recruiter's jobs, most recent first.
    async fn list_job_applicants(
        &self,
        recruiter_id: UserId,
        job_id: JobId,
        pagination: &Pagination,
    ) -> Result<Page<JobWithApplicantResponse>>;

    /// Move an application to `status`. Only the recruiter who owns the job may do this.
    async fn update_application_status(
        &self,
        recruiter_id: UserId,
        application_id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<JobApplicationResponse>;

    async fn create_job_type(&self, job_type: JobTypeCreate) -> Result<JobTypeResponse>;

    async fn update_job_type(&self, id: JobTypeId, update: JobTypeUpdate) -> Result<JobTypeResponse>;

    async fn delete_job_type(&self, id: JobTypeId) -> Result<()>;
}

/// Check that `job` exists and belongs to `recruiter_id`.
fn ensure_owner(
    job: Option<JobDBResponse>,
    job_id: JobId,
    recruiter_id: UserId,
    action: Operation,
    resource: Resource,
) -> Result<JobDBResponse> {
    let job = job.ok_or_else(|| super::job_not_found(job_id))?;
    if job.recruiter_id != recruiter_id {
        return Err(Error::InsufficientPermissions { action, resource });
    }
    Ok(job)
}

fn job_type_not_found(id: JobTypeId) -> Error {
    Error::NotFound {
        resource: "Job type".to_string(),
        id: id.to_string(),
    }
}

pub struct PgRecruiterService {
    db: PgPool,
}

impl PgRecruiterService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl RecruiterService for PgRecruiterService {
    #[instrument(skip(self, search), err)]
    async fn list_my_jobs(&self, recruiter_id: UserId, search: &JobSearch) -> Result<Vec<JobResponse>> {
        let filter = JobFilter::new(search.clone()).owned_by(recruiter_id);

        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let jobs = Jobs::new(&mut conn).list(&filter).await?;

        Ok(jobs.into_iter().map(JobResponse::from).collect())
    }

    #[instrument(skip(self, job), err)]
    async fn create_job(&self, recruiter_id: UserId, job: JobCreate) -> Result<JobResponse> {
        let request = job.into_db_request(recruiter_id)?;

        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let job = Jobs::new(&mut conn).create(&request).await?;

        Ok(job.into())
    }

    #[instrument(skip(self, update), err)]
    async fn update_job(&self, recruiter_id: UserId, job_id: JobId, update: JobUpdate) -> Result<JobResponse> {
        let request = update.into_db_request()?;

        let mut tx = self.db.begin().await.map_err(|e| Error::Database(e.into()))?;
        let existing = Jobs::new(&mut tx).get_for_update(job_id).await?;
        ensure_owner(existing, job_id, recruiter_id, Operation::UpdateOwn, Resource::Jobs)?;

        let job = Jobs::new(&mut tx).update(job_id, &request).await?;
        tx.commit().await.map_err(|e| Error::Database(e.into()))?;

        Ok(job.into())
    }

    #[instrument(skip(self), err)]
    async fn delete_job(&self, recruiter_id: UserId, job_id: JobId) -> Result<()> {
        let mut tx = self.db.begin().await.map_err(|e| Error::Database(e.into()))?;
        let existing = Jobs::new(&mut tx).get_for_update(job_id).await?;
        ensure_owner(existing, job_id, recruiter_id, Operation::DeleteOwn, Resource::Jobs)?;

        Jobs::new(&mut tx).delete(job_id).await?;
        tx.commit().await.map_err(|e| Error::Database(e.into()))?;

        Ok(())
    }

    #[instrument(skip(self, pagination), err)]
    async fn list_job_applicants(
        &self,
        recruiter_id: UserId,
        job_id: JobId,
        pagination: &Pagination,
    ) -> Result<Page<JobWithApplicantResponse>> {
        let filter = JobApplicationFilter::for_job(job_id, pagination);

        let mut tx = db::begin_snapshot(&self.db).await?;
        let job = Jobs::new(&mut tx).get_by_id(job_id).await?;
        ensure_owner(job, job_id, recruiter_id, Operation::ReadOwn, Resource::Applications)?;

        let total_count = JobApplications::new(&mut tx).count(&filter).await?;
        let rows = JobApplications::new(&mut tx).list(&filter).await?;
        tx.commit().await.map_err(|e| Error::Database(e.into()))?;

        Ok(Page::new(
            rows.into_iter().map(JobWithApplicantResponse::from).collect(),
            total_count,
            pagination,
        ))
    }

    #[instrument(skip(self), err)]
    async fn update_application_status(
        &self,
        recruiter_id: UserId,
        application_id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<JobApplicationResponse> {
        let not_found = || Error::NotFound {
            resource: "Job application".to_string(),
            id: application_id.to_string(),
        };

        let mut tx = self.db.begin().await.map_err(|e| Error::Database(e.into()))?;
        let application = JobApplications::new(&mut tx)
            .get_by_id(application_id)
            .await?
            .ok_or_else(not_found)?;

        let job = Jobs::new(&mut tx).get_for_update(application.job_id).await?;
        ensure_owner(job, application.job_id, recruiter_id, Operation::UpdateOwn, Resource::Applications)?;

        let updated = JobApplications::new(&mut tx)
            .update_status(application_id, status)
            .await?
            .ok_or_else(not_found)?;
        tx.commit().await.map_err(|e| Error::Database(e.into()))?;

        Ok(updated.into())
    }

    #[instrument(skip(self, job_type), err)]
    async fn create_job_type(&self, job_type: JobTypeCreate) -> Result<JobTypeResponse> {
        let request = job_type.into_db_request()?;

        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let job_type = JobTypes::new(&mut conn).create(&request).await?;

        Ok(job_type.into())
    }

    #[instrument(skip(self, update), err)]
    async fn update_job_type(&self, id: JobTypeId, update: JobTypeUpdate) -> Result<JobTypeResponse> {
        let request = update.into_db_request()?;

        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let job_type = JobTypes::new(&mut conn).update(id, &request).await.map_err(|e| match e {
            db::errors::DbError::NotFound => job_type_not_found(id),
            other => other.into(),
        })?;

        Ok(job_type.into())
    }

    #[instrument(skip(self), err)]
    async fn delete_job_type(&self, id: JobTypeId) -> Result<()> {
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        if !JobTypes::new(&mut conn).delete(id).await? {
            return Err(job_type_not_found(id));
        }

        Ok(())
    }
}
