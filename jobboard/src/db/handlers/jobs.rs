//! Database repository for job postings.
//!
//! [`Jobs::count`] and [`Jobs::list`] build their WHERE clause through the same
//! [`push_where`] so a page and its total always agree on which rows match.

use crate::api::models::pagination::Pagination;
use crate::db::{
    errors::{DbError, Result},
    handlers::filters::JobSearch,
    models::jobs::{JobCreateDBRequest, JobDBResponse, JobUpdateDBRequest},
};
use crate::types::{JobId, UserId};
use sqlx::{PgConnection, Postgres, QueryBuilder};
use tracing::instrument;

const JOB_COLUMNS: &str = "j.id, j.title, j.description, j.location, j.salary, j.category, j.job_type_id, \
     jt.name AS job_type_name, j.recruiter_id, j.created_at, j.updated_at";

/// Filter for listing jobs
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub search: JobSearch,
    /// Restrict to jobs posted by this recruiter
    pub recruiter_id: Option<UserId>,
    /// `None` returns every matching row
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl JobFilter {
    pub fn new(search: JobSearch) -> Self {
        Self {
            search,
            ..Default::default()
        }
    }

    pub fn owned_by(mut self, recruiter_id: UserId) -> Self {
        self.recruiter_id = Some(recruiter_id);
        self
    }

    pub fn paginate(mut self, pagination: &Pagination) -> Self {
        self.skip = Some(pagination.offset());
        self.limit = Some(pagination.limit());
        self
    }
}

fn push_where(query: &mut QueryBuilder<'_, Postgres>, filter: &JobFilter) {
    query.push(" WHERE 1=1");
    if let Some(recruiter_id) = filter.recruiter_id {
        query.push(" AND j.recruiter_id = ");
        query.push_bind(recruiter_id);
    }
    filter.search.push_predicates(query, "j");
}

pub struct Jobs<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Jobs<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Number of jobs matching the filter, ignoring `skip`/`limit`.
    #[instrument(skip(self, filter), fields(recruiter_id = ?filter.recruiter_id), err)]
    pub async fn count(&mut self, filter: &JobFilter) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM jobs j");
        push_where(&mut query, filter);

        let count: i64 = query.build_query_scalar().fetch_one(&mut *self.db).await?;

        Ok(count)
    }

    /// Fetch a job with a row lock, for ownership checks ahead of a mutation.
    #[instrument(skip(self), err)]
    pub async fn get_for_update(&mut self, id: JobId) -> Result<Option<JobDBResponse>> {
        let job = sqlx::query_as::<_, JobDBResponse>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j LEFT JOIN job_types jt ON jt.id = j.job_type_id WHERE j.id = $1 FOR UPDATE OF j"
        ))
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(job)
    }

    #[instrument(skip(self, request), fields(title = %request.title, recruiter_id = request.recruiter_id), err)]
    pub async fn create(&mut self, request: &JobCreateDBRequest) -> Result<JobDBResponse> {
        let job = sqlx::query_as::<_, JobDBResponse>(&format!(
            r#"
            WITH j AS (
                INSERT INTO jobs (title, description, location, salary, category, job_type_id, recruiter_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
            )
            SELECT {JOB_COLUMNS} FROM j LEFT JOIN job_types jt ON jt.id = j.job_type_id
            "#
        ))
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.location)
        .bind(request.salary)
        .bind(&request.category)
        .bind(request.job_type_id)
        .bind(request.recruiter_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(job)
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: JobId) -> Result<Option<JobDBResponse>> {
        let job = sqlx::query_as::<_, JobDBResponse>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j LEFT JOIN job_types jt ON jt.id = j.job_type_id WHERE j.id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(job)
    }

    #[instrument(skip(self, filter), fields(skip = ?filter.skip, limit = ?filter.limit, recruiter_id = ?filter.recruiter_id), err)]
    pub async fn list(&mut self, filter: &JobFilter) -> Result<Vec<JobDBResponse>> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {JOB_COLUMNS} FROM jobs j LEFT JOIN job_types jt ON jt.id = j.job_type_id"
        ));
        push_where(&mut query, filter);
        query.push(" ORDER BY j.created_at DESC, j.id DESC");

        if let Some(limit) = filter.limit {
            query.push(" LIMIT ");
            query.push_bind(limit);
        }
        if let Some(skip) = filter.skip {
            query.push(" OFFSET ");
            query.push_bind(skip);
        }

        let jobs = query.build_query_as::<JobDBResponse>().fetch_all(&mut *self.db).await?;
        tracing::debug!("Retrieved {} jobs", jobs.len());

        Ok(jobs)
    }

    /// Applications for the job are removed with it.
    #[instrument(skip(self), err)]
    pub async fn delete(&mut self, id: JobId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1").bind(id).execute(&mut *self.db).await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    pub async fn update(&mut self, id: JobId, request: &JobUpdateDBRequest) -> Result<JobDBResponse> {
        let job = sqlx::query_as::<_, JobDBResponse>(&format!(
            r#"
            WITH j AS (
                UPDATE jobs SET
                    title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    location = COALESCE($4, location),
                    salary = COALESCE($5, salary),
                    category = COALESCE($6, category),
                    job_type_id = COALESCE($7, job_type_id),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
            )
            SELECT {JOB_COLUMNS} FROM j LEFT JOIN job_types jt ON jt.id = j.job_type_id
            "#
        ))
        .bind(id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.location)
        .bind(request.salary)
        .bind(&request.category)
        .bind(request.job_type_id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(job)
    }
}
