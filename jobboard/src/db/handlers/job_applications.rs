//! Database repository for job applications.
//!
//! Listings read the wide join
//!
//! ```text
//! jobs j
//!   LEFT JOIN job_applications ja ON j.id = ja.job_id
//!   LEFT JOIN job_types jt        ON j.job_type_id = jt.id
//!   LEFT JOIN applicants a        ON ja.applicant_id = a.applicant_id
//! ```
//!
//! scoped either to one applicant (with title/location filters on the job) or to one job.
//! [`JobApplications::count`] and [`JobApplications::list`] share the FROM/WHERE fragment.

use crate::api::models::{job_applications::ApplicationStatus, pagination::Pagination};
use crate::db::{
    errors::Result,
    handlers::filters::JobSearch,
    models::job_applications::{JobApplicationCreateDBRequest, JobApplicationDBResponse, JobWithApplicantDBResponse},
};
use crate::types::{ApplicationId, JobId, UserId};
use sqlx::{PgConnection, Postgres, QueryBuilder};
use tracing::instrument;

const WIDE_COLUMNS: &str = r#"
    j.id AS job_id, j.title, j.description, j.location, j.salary, j.category, j.recruiter_id,
    j.job_type_id, jt.name AS job_type_name,
    ja.id AS job_application_id, ja.applicant_id, ja.application_date, ja.status,
    a.id AS applicant_profile_id, a.full_name AS applicant_name, a.phone AS applicant_phone,
    a.address AS applicant_address, a.resume_url, a.skills, a.date_of_birth
"#;

const APPLICATION_COLUMNS: &str = "id, job_id, applicant_id, application_date, status";

/// Which slice of the join a listing reads
#[derive(Debug, Clone)]
pub enum ApplicationScope {
    /// Jobs the user applied to, filtered on the job's title and location
    Applicant { applicant_id: UserId, search: JobSearch },
    /// Applications received by one job
    Job(JobId),
}

/// Filter for listing job applications
#[derive(Debug, Clone)]
pub struct JobApplicationFilter {
    pub scope: ApplicationScope,
    pub skip: i64,
    pub limit: i64,
}

impl JobApplicationFilter {
    pub fn for_applicant(applicant_id: UserId, search: JobSearch, pagination: &Pagination) -> Self {
        Self {
            scope: ApplicationScope::Applicant { applicant_id, search },
            skip: pagination.offset(),
            limit: pagination.limit(),
        }
    }

    pub fn for_job(job_id: JobId, pagination: &Pagination) -> Self {
        Self {
            scope: ApplicationScope::Job(job_id),
            skip: pagination.offset(),
            limit: pagination.limit(),
        }
    }
}

fn push_from_where(query: &mut QueryBuilder<'_, Postgres>, scope: &ApplicationScope) {
    query.push(
        " FROM jobs j \
         LEFT JOIN job_applications ja ON j.id = ja.job_id \
         LEFT JOIN job_types jt ON j.job_type_id = jt.id \
         LEFT JOIN applicants a ON ja.applicant_id = a.applicant_id \
         WHERE 1=1",
    );

    match scope {
        ApplicationScope::Applicant { applicant_id, search } => {
            query.push(" AND ja.applicant_id = ");
            query.push_bind(*applicant_id);
            search.push_predicates(query, "j");
        }
        ApplicationScope::Job(job_id) => {
            query.push(" AND ja.job_id = ");
            query.push_bind(*job_id);
        }
    }
}

pub struct JobApplications<'c> {
    db: &'c mut PgConnection,
}

impl<'c> JobApplications<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Number of joined rows in scope, ignoring `skip`/`limit`.
    #[instrument(skip(self, filter), fields(scope = ?filter.scope), err)]
    pub async fn count(&mut self, filter: &JobApplicationFilter) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*)");
        push_from_where(&mut query, &filter.scope);

        let count: i64 = query.build_query_scalar().fetch_one(&mut *self.db).await?;

        Ok(count)
    }

    /// One page of joined rows, most recent application first.
    #[instrument(skip(self, filter), fields(scope = ?filter.scope, skip = filter.skip, limit = filter.limit), err)]
    pub async fn list(&mut self, filter: &JobApplicationFilter) -> Result<Vec<JobWithApplicantDBResponse>> {
        let mut query = QueryBuilder::new(format!("SELECT {WIDE_COLUMNS}"));
        push_from_where(&mut query, &filter.scope);
        query.push(" ORDER BY ja.application_date DESC, ja.id DESC LIMIT ");
        query.push_bind(filter.limit);
        query.push(" OFFSET ");
        query.push_bind(filter.skip);

        let rows = query
            .build_query_as::<JobWithApplicantDBResponse>()
            .fetch_all(&mut *self.db)
            .await?;
        tracing::debug!("Retrieved {} application rows", rows.len());

        Ok(rows)
    }

    /// Duplicate applications to the same job are accepted.
    #[instrument(skip(self, request), fields(job_id = request.job_id, applicant_id = request.applicant_id), err)]
    pub async fn create(&mut self, request: &JobApplicationCreateDBRequest) -> Result<JobApplicationDBResponse> {
        let application = sqlx::query_as::<_, JobApplicationDBResponse>(&format!(
            r#"
            INSERT INTO job_applications (job_id, applicant_id, application_date, status)
            VALUES ($1, $2, $3, $4)
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(request.job_id)
        .bind(request.applicant_id)
        .bind(request.application_date)
        .bind(request.status)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(application)
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: ApplicationId) -> Result<Option<JobApplicationDBResponse>> {
        let application = sqlx::query_as::<_, JobApplicationDBResponse>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM job_applications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(application)
    }

    /// Only the status changes. Returns `None` when the application does not exist.
    #[instrument(skip(self), err)]
    pub async fn update_status(
        &mut self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplicationDBResponse>> {
        let application = sqlx::query_as::<_, JobApplicationDBResponse>(&format!(
            "UPDATE job_applications SET status = $2 WHERE id = $1 RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(application)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::errors::DbError;
    use crate::test_utils::{create_test_applicant, create_test_job, create_test_user};
    use chrono::{Duration, Utc};
    use sqlx::PgPool;

    async fn apply_at(pool: &PgPool, job_id: JobId, applicant_id: UserId, minutes_ago: i64) -> JobApplicationDBResponse {
        let mut conn = pool.acquire().await.unwrap();
        JobApplications::new(&mut conn)
            .create(&JobApplicationCreateDBRequest {
                job_id,
                applicant_id,
                application_date: Utc::now() - Duration::minutes(minutes_ago),
                status: ApplicationStatus::InReview,
            })
            .await
            .unwrap()
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_job_without_applicants_is_empty(pool: PgPool) {
        let recruiter = create_test_user(&pool, true).await;
        let job = create_test_job(&pool, recruiter.id, "Backend Dev", "Remote").await;

        let filter = JobApplicationFilter::for_job(job.id, &Pagination::default());
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = JobApplications::new(&mut conn);

        assert_eq!(repo.count(&filter).await.unwrap(), 0);
        assert!(repo.list(&filter).await.unwrap().is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_applicants_for_job_most_recent_first(pool: PgPool) {
        let recruiter = create_test_user(&pool, true).await;
        let job = create_test_job(&pool, recruiter.id, "Backend Dev", "Remote").await;
        let other_job = create_test_job(&pool, recruiter.id, "Designer", "NYC").await;
        let early = create_test_applicant(&pool, "Early Bird").await;
        let late = create_test_applicant(&pool, "Late Comer").await;

        apply_at(&pool, job.id, early.applicant_id, 60).await;
        apply_at(&pool, job.id, late.applicant_id, 5).await;
        apply_at(&pool, other_job.id, late.applicant_id, 1).await;

        let filter = JobApplicationFilter::for_job(job.id, &Pagination::default());
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = JobApplications::new(&mut conn);

        assert_eq!(repo.count(&filter).await.unwrap(), 2);
        let rows = repo.list(&filter).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.applicant_name.clone().unwrap()).collect();
        assert_eq!(names, vec!["Late Comer", "Early Bird"]);

        let row = &rows[0];
        assert_eq!(row.job_id, job.id);
        assert_eq!(row.title, "Backend Dev");
        assert_eq!(row.applicant_id, Some(late.applicant_id));
        assert_eq!(row.applicant_profile_id, Some(late.id));
        assert_eq!(row.status, Some(ApplicationStatus::InReview));
        assert_eq!(row.resume_url.as_deref(), Some(late.resume_url.as_str()));
        assert!(row.job_type_name.is_none());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_applied_jobs_with_filters_and_pages(pool: PgPool) {
        let recruiter = create_test_user(&pool, true).await;
        let applicant = create_test_applicant(&pool, "Grace Hopper").await;
        let someone_else = create_test_applicant(&pool, "Someone Else").await;

        let backend = create_test_job(&pool, recruiter.id, "Backend Dev", "Remote").await;
        let frontend = create_test_job(&pool, recruiter.id, "Frontend Dev", "NYC").await;
        let designer = create_test_job(&pool, recruiter.id, "Designer", "NYC").await;

        apply_at(&pool, backend.id, applicant.applicant_id, 30).await;
        apply_at(&pool, frontend.id, applicant.applicant_id, 20).await;
        apply_at(&pool, designer.id, applicant.applicant_id, 10).await;
        apply_at(&pool, backend.id, someone_else.applicant_id, 1).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = JobApplications::new(&mut conn);

        let all = JobApplicationFilter::for_applicant(applicant.applicant_id, JobSearch::default(), &Pagination::default());
        assert_eq!(repo.count(&all).await.unwrap(), 3);
        let titles: Vec<_> = repo.list(&all).await.unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Designer", "Frontend Dev", "Backend Dev"]);

        let devs = JobApplicationFilter::for_applicant(
            applicant.applicant_id,
            JobSearch::default().with_title("dev"),
            &Pagination::default(),
        );
        assert_eq!(repo.count(&devs).await.unwrap(), 2);

        let nyc_devs = JobApplicationFilter::for_applicant(
            applicant.applicant_id,
            JobSearch::default().with_title("dev").with_location("nyc"),
            &Pagination::default(),
        );
        let titles: Vec<_> = repo.list(&nyc_devs).await.unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Frontend Dev"]);

        let second_page = JobApplicationFilter::for_applicant(applicant.applicant_id, JobSearch::default(), &Pagination::new(2, 2));
        assert_eq!(repo.count(&second_page).await.unwrap(), 3);
        let titles: Vec<_> = repo.list(&second_page).await.unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Backend Dev"]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_duplicate_applications_allowed(pool: PgPool) {
        let recruiter = create_test_user(&pool, true).await;
        let job = create_test_job(&pool, recruiter.id, "Backend Dev", "Remote").await;
        let applicant = create_test_applicant(&pool, "Twice Applied").await;

        let first = apply_at(&pool, job.id, applicant.applicant_id, 2).await;
        let second = apply_at(&pool, job.id, applicant.applicant_id, 1).await;
        assert_ne!(first.id, second.id);

        let mut conn = pool.acquire().await.unwrap();
        let filter = JobApplicationFilter::for_job(job.id, &Pagination::default());
        assert_eq!(JobApplications::new(&mut conn).count(&filter).await.unwrap(), 2);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_apply_requires_existing_profile_and_job(pool: PgPool) {
        let recruiter = create_test_user(&pool, true).await;
        let job = create_test_job(&pool, recruiter.id, "Backend Dev", "Remote").await;
        let no_profile = create_test_user(&pool, false).await;

        let mut conn = pool.acquire().await.unwrap();
        let err = JobApplications::new(&mut conn)
            .create(&JobApplicationCreateDBRequest {
                job_id: job.id,
                applicant_id: no_profile.id,
                application_date: Utc::now(),
                status: ApplicationStatus::InReview,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ProfileRequired), "expected ProfileRequired, got {err:?}");

        let applicant = create_test_applicant(&pool, "Lost Applicant").await;
        let err = JobApplications::new(&mut conn)
            .create(&JobApplicationCreateDBRequest {
                job_id: job.id + 1000,
                applicant_id: applicant.applicant_id,
                application_date: Utc::now(),
                status: ApplicationStatus::InReview,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UnknownJob), "expected UnknownJob, got {err:?}");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_status(pool: PgPool) {
        let recruiter = create_test_user(&pool, true).await;
        let job = create_test_job(&pool, recruiter.id, "Backend Dev", "Remote").await;
        let applicant = create_test_applicant(&pool, "Status Check").await;
        let application = apply_at(&pool, job.id, applicant.applicant_id, 1).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = JobApplications::new(&mut conn);

        let updated = repo
            .update_status(application.id, ApplicationStatus::Accepted)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, ApplicationStatus::Accepted);
        assert_eq!(updated.application_date, application.application_date);
        assert_eq!(updated.job_id, job.id);

        let fetched = repo.get_by_id(application.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, ApplicationStatus::Accepted);

        assert!(repo.update_status(application.id + 100, ApplicationStatus::Rejected).await.unwrap().is_none());
    }
}
