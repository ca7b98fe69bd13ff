//! Applicant operations: the profile, applying to jobs, and the applied-jobs listing.

use crate::{
    api::models::{
        applicants::{ApplicantProfileRequest, ApplicantProfileResponse},
        job_applications::{
            ApplicationStatus, ApplyRequest, JobApplicationResponse, JobWithApplicantResponse, ListAppliedJobsQuery,
        },
        pagination::Page,
    },
    db::{
        self,
        handlers::{Applicants, JobApplicationFilter, JobApplications, Jobs},
        models::job_applications::JobApplicationCreateDBRequest,
    },
    errors::{Error, Result},
    types::UserId,
};
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

#[async_trait::async_trait]
pub trait ApplicantService: Send + Sync {
    /// `None` until the user has saved a profile.
    async fn get_profile(&self, user_id: UserId) -> Result<Option<ApplicantProfileResponse>>;

    /// Fails with a 409 [`DbError::ProfileExists`](crate::db::errors::DbError::ProfileExists) if the user already has a profile.
    async fn create_profile(&self, user_id: UserId, profile: ApplicantProfileRequest) -> Result<ApplicantProfileResponse>;

    /// Replace every profile field. Fails with [`Error::NotFound`] if there is no profile yet.
    async fn update_profile(&self, user_id: UserId, profile: ApplicantProfileRequest) -> Result<ApplicantProfileResponse>;

    /// Apply to a job. Requires a saved profile; repeated applications to one job are accepted.
    async fn apply(&self, user_id: UserId, request: ApplyRequest) -> Result<JobApplicationResponse>;

    /// Jobs the user applied to, most recent application first.
    async fn list_applied_jobs(&self, user_id: UserId, query: &ListAppliedJobsQuery) -> Result<Page<JobWithApplicantResponse>>;
}

pub struct PgApplicantService {
    db: PgPool,
}

impl PgApplicantService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ApplicantService for PgApplicantService {
    #[instrument(skip(self), err)]
    async fn get_profile(&self, user_id: UserId) -> Result<Option<ApplicantProfileResponse>> {
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let profile = Applicants::new(&mut conn).get_by_user_id(user_id).await?;

        Ok(profile.map(ApplicantProfileResponse::from))
    }

    #[instrument(skip(self, profile), err)]
    async fn create_profile(&self, user_id: UserId, profile: ApplicantProfileRequest) -> Result<ApplicantProfileResponse> {
        let request = profile.into_create_request(user_id)?;

        // A second profile fails the unique constraint as DbError::ProfileExists
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let created = Applicants::new(&mut conn).create(&request).await?;

        Ok(created.into())
    }

    #[instrument(skip(self, profile), err)]
    async fn update_profile(&self, user_id: UserId, profile: ApplicantProfileRequest) -> Result<ApplicantProfileResponse> {
        let request = profile.into_update_request()?;

        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let updated = Applicants::new(&mut conn)
            .update_by_user_id(user_id, &request)
            .await?
            .ok_or_else(|| Error::NotFound {
                resource: "Applicant profile".to_string(),
                id: user_id.to_string(),
            })?;

        Ok(updated.into())
    }

    #[instrument(skip(self, request), fields(job_id = request.job_id), err)]
    async fn apply(&self, user_id: UserId, request: ApplyRequest) -> Result<JobApplicationResponse> {
        let mut tx = self.db.begin().await.map_err(|e| Error::Database(e.into()))?;

        if Applicants::new(&mut tx).get_by_user_id(user_id).await?.is_none() {
            return Err(Error::BadRequest {
                message: "Please fill profile first".to_string(),
            });
        }
        if Jobs::new(&mut tx).get_by_id(request.job_id).await?.is_none() {
            return Err(super::job_not_found(request.job_id));
        }

        let application = JobApplications::new(&mut tx)
            .create(&JobApplicationCreateDBRequest {
                job_id: request.job_id,
                applicant_id: user_id,
                application_date: Utc::now(),
                status: ApplicationStatus::InReview,
            })
            .await?;
        tx.commit().await.map_err(|e| Error::Database(e.into()))?;

        Ok(application.into())
    }

    #[instrument(skip(self, query), fields(title = ?query.title, location = ?query.location), err)]
    async fn list_applied_jobs(&self, user_id: UserId, query: &ListAppliedJobsQuery) -> Result<Page<JobWithApplicantResponse>> {
        let filter = JobApplicationFilter::for_applicant(user_id, query.search(), &query.pagination);

        let mut tx = db::begin_snapshot(&self.db).await?;
        let total_count = JobApplications::new(&mut tx).count(&filter).await?;
        let rows = JobApplications::new(&mut tx).list(&filter).await?;
        tx.commit().await.map_err(|e| Error::Database(e.into()))?;

        Ok(Page::new(
            rows.into_iter().map(JobWithApplicantResponse::from).collect(),
            total_count,
            &query.pagination,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::pagination::Pagination;
    use crate::test_utils::{create_test_applicant, create_test_job, create_test_user};
    use axum::http::StatusCode;
    use chrono::NaiveDate;

    fn profile(name: &str) -> ApplicantProfileRequest {
        ApplicantProfileRequest {
            full_name: name.to_string(),
            phone: "+1 555 0100".to_string(),
            address: "1 Main St".to_string(),
            resume_url: "https://cv.example.com/me.pdf".to_string(),
            skills: "Rust".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 5, 17).unwrap(),
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_profile_create_update_conflict(pool: PgPool) {
        let user = create_test_user(&pool, false).await;
        let service = PgApplicantService::new(pool.clone());

        assert!(service.get_profile(user.id).await.unwrap().is_none());
        let err = service.update_profile(user.id, profile("Ada")).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let created = service.create_profile(user.id, profile("Ada")).await.unwrap();
        assert_eq!(created.user_id, user.id);

        let err = service.create_profile(user.id, profile("Ada again")).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.user_message(), "An applicant profile already exists for this user");

        let updated = service.update_profile(user.id, profile("Ada King")).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(
            service.get_profile(user.id).await.unwrap().unwrap().full_name,
            "Ada King"
        );
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_apply_requires_profile_and_job(pool: PgPool) {
        let recruiter = create_test_user(&pool, true).await;
        let job = create_test_job(&pool, recruiter.id, "Backend Dev", "Remote").await;
        let user = create_test_user(&pool, false).await;
        let service = PgApplicantService::new(pool.clone());

        let err = service.apply(user.id, ApplyRequest { job_id: job.id }).await.unwrap_err();
        assert_eq!(err.user_message(), "Please fill profile first");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        service.create_profile(user.id, profile("Ada")).await.unwrap();
        let err = service.apply(user.id, ApplyRequest { job_id: 9999 }).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let application = service.apply(user.id, ApplyRequest { job_id: job.id }).await.unwrap();
        assert_eq!(application.status, ApplicationStatus::InReview);
        assert_eq!(application.applicant_id, user.id);

        // A second application to the same job is accepted
        let again = service.apply(user.id, ApplyRequest { job_id: job.id }).await.unwrap();
        assert_ne!(again.id, application.id);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_applied_jobs_listing(pool: PgPool) {
        let recruiter = create_test_user(&pool, true).await;
        let backend = create_test_job(&pool, recruiter.id, "Backend Engineer", "Berlin").await;
        let frontend = create_test_job(&pool, recruiter.id, "Frontend Engineer", "Remote").await;
        let designer = create_test_job(&pool, recruiter.id, "Designer", "Remote").await;
        let applicant = create_test_applicant(&pool, "Grace").await;
        let other = create_test_applicant(&pool, "Linus").await;
        let service = PgApplicantService::new(pool.clone());

        for job in [&backend, &frontend, &designer] {
            service.apply(applicant.applicant_id, ApplyRequest { job_id: job.id }).await.unwrap();
        }
        service.apply(other.applicant_id, ApplyRequest { job_id: backend.id }).await.unwrap();

        let all = service
            .list_applied_jobs(applicant.applicant_id, &ListAppliedJobsQuery::default())
            .await
            .unwrap();
        assert_eq!(all.total_count, 3);
        let ids: Vec<_> = all.items.iter().map(|r| r.job_id).collect();
        assert_eq!(ids, vec![designer.id, frontend.id, backend.id]);
        assert!(all.items.iter().all(|r| r.applicant_name.as_deref() == Some("Grace")));

        let engineers = service
            .list_applied_jobs(
                applicant.applicant_id,
                &ListAppliedJobsQuery {
                    pagination: Pagination::new(1, 1),
                    title: Some("ENGINEER".to_string()),
                    location: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(engineers.total_count, 2);
        assert_eq!(engineers.items.len(), 1);
        assert_eq!(engineers.total_pages, 2);
        assert!(engineers.has_next_page);
        assert_eq!(engineers.items[0].job_id, frontend.id);
    }
}
