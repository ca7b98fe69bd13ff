//! Database repository for job types.

use crate::db::{
    errors::{DbError, Result},
    handlers::filters::push_contains,
    models::job_types::{JobTypeCreateDBRequest, JobTypeDBResponse, JobTypeUpdateDBRequest},
};
use crate::types::JobTypeId;
use sqlx::{PgConnection, QueryBuilder};
use tracing::instrument;

/// Filter for listing job types. The lookup list is not paginated.
#[derive(Debug, Clone, Default)]
pub struct JobTypeFilter {
    /// Case-insensitive substring match on the name
    pub search: Option<String>,
}

impl JobTypeFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

pub struct JobTypes<'c> {
    db: &'c mut PgConnection,
}

impl<'c> JobTypes<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    pub async fn create(&mut self, request: &JobTypeCreateDBRequest) -> Result<JobTypeDBResponse> {
        let job_type = sqlx::query_as::<_, JobTypeDBResponse>(
            r#"
            INSERT INTO job_types (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(job_type)
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: JobTypeId) -> Result<Option<JobTypeDBResponse>> {
        let job_type = sqlx::query_as::<_, JobTypeDBResponse>(
            "SELECT id, name, description, created_at, updated_at FROM job_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(job_type)
    }

    #[instrument(skip(self, filter), err)]
    pub async fn list(&mut self, filter: &JobTypeFilter) -> Result<Vec<JobTypeDBResponse>> {
        let mut query = QueryBuilder::new("SELECT id, name, description, created_at, updated_at FROM job_types WHERE 1=1");
        push_contains(&mut query, "name", filter.search.as_deref());
        query.push(" ORDER BY created_at DESC, id DESC");

        let job_types = query.build_query_as::<JobTypeDBResponse>().fetch_all(&mut *self.db).await?;

        Ok(job_types)
    }

    /// Jobs still pointing at the type keep their category; their legacy link is cleared.
    #[instrument(skip(self), err)]
    pub async fn delete(&mut self, id: JobTypeId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM job_types WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    pub async fn update(&mut self, id: JobTypeId, request: &JobTypeUpdateDBRequest) -> Result<JobTypeDBResponse> {
        let job_type = sqlx::query_as::<_, JobTypeDBResponse>(
            r#"
            UPDATE job_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.description)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(job_type)
    }
}
