//! Public reads: the paginated job board and the job type lookup list.

use crate::{
    api::models::{
        job_types::{JobTypeResponse, ListJobTypesQuery},
        jobs::{JobResponse, ListJobsQuery},
        pagination::Page,
    },
    db::{
        self,
        handlers::{JobFilter, JobTypeFilter, JobTypes, Jobs},
    },
    errors::{Error, Result},
    types::{JobId, JobTypeId},
};
use sqlx::PgPool;
use tracing::instrument;

#[async_trait::async_trait]
pub trait JobBoardService: Send + Sync {
    /// Every recruiter's jobs, newest first, filtered on title and location.
    async fn list_jobs(&self, query: &ListJobsQuery) -> Result<Page<JobResponse>>;

    async fn get_job(&self, id: JobId) -> Result<JobResponse>;

    /// The whole lookup list, newest first.
    async fn list_job_types(&self, query: &ListJobTypesQuery) -> Result<Vec<JobTypeResponse>>;

    async fn get_job_type(&self, id: JobTypeId) -> Result<JobTypeResponse>;
}

pub struct PgJobBoardService {
    db: PgPool,
}

impl PgJobBoardService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl JobBoardService for PgJobBoardService {
    #[instrument(skip(self, query), fields(title = ?query.title, location = ?query.location), err)]
    async fn list_jobs(&self, query: &ListJobsQuery) -> Result<Page<JobResponse>> {
        let filter = JobFilter::new(query.search()).paginate(&query.pagination);

        let mut tx = db::begin_snapshot(&self.db).await?;
        let total_count = Jobs::new(&mut tx).count(&filter).await?;
        let jobs = Jobs::new(&mut tx).list(&filter).await?;
        tx.commit().await.map_err(|e| Error::Database(e.into()))?;

        Ok(Page::new(
            jobs.into_iter().map(JobResponse::from).collect(),
            total_count,
            &query.pagination,
        ))
    }

    #[instrument(skip(self), err)]
    async fn get_job(&self, id: JobId) -> Result<JobResponse> {
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let job = Jobs::new(&mut conn).get_by_id(id).await?.ok_or_else(|| super::job_not_found(id))?;

        Ok(job.into())
    }

    #[instrument(skip(self, query), err)]
    async fn list_job_types(&self, query: &ListJobTypesQuery) -> Result<Vec<JobTypeResponse>> {
        let mut filter = JobTypeFilter::default();
        if let Some(search) = query.search.as_deref() {
            filter = filter.with_search(search);
        }

        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let job_types = JobTypes::new(&mut conn).list(&filter).await?;

        Ok(job_types.into_iter().map(JobTypeResponse::from).collect())
    }

    #[instrument(skip(self), err)]
    async fn get_job_type(&self, id: JobTypeId) -> Result<JobTypeResponse> {
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let job_type = JobTypes::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound {
                resource: "Job type".to_string(),
                id: id.to_string(),
            })?;

        Ok(job_type.into())
    }
}
