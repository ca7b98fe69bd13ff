//! Applicant endpoints. A profile must exist before the applicant can apply to a job.

use crate::{
    AppState,
    api::models::{
        applicants::{ApplicantProfileRequest, ApplicantProfileResponse},
        job_applications::{ApplyRequest, JobApplicationResponse, JobWithApplicantResponse, ListAppliedJobsQuery},
        pagination::Page,
    },
    auth::current_user::RequiresApplicant,
    errors::{Error, Result},
    services::{ApplicantService, PgApplicantService},
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/applicant/profile",
    tag = "applicant",
    summary = "Get my profile",
    responses(
        (status = 200, description = "The caller's profile", body = ApplicantProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is a recruiter"),
        (status = 404, description = "No profile yet"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiresApplicant(user): RequiresApplicant,
) -> Result<Json<ApplicantProfileResponse>> {
    let profile = PgApplicantService::new(state.db)
        .get_profile(user.id)
        .await?
        .ok_or_else(|| Error::NotFound {
            resource: "Applicant profile".to_string(),
            id: user.id.to_string(),
        })?;
    Ok(Json(profile))
}

#[utoipa::path(
    post,
    path = "/applicant/profile",
    tag = "applicant",
    summary = "Create my profile",
    request_body = ApplicantProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = ApplicantProfileResponse),
        (status = 400, description = "Invalid profile fields"),
        (status = 409, description = "Profile already exists"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn create_profile(
    State(state): State<AppState>,
    RequiresApplicant(user): RequiresApplicant,
    Json(profile): Json<ApplicantProfileRequest>,
) -> Result<(StatusCode, Json<ApplicantProfileResponse>)> {
    let profile = PgApplicantService::new(state.db).create_profile(user.id, profile).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

#[utoipa::path(
    put,
    path = "/applicant/profile",
    tag = "applicant",
    summary = "Replace my profile",
    request_body = ApplicantProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApplicantProfileResponse),
        (status = 400, description = "Invalid profile fields"),
        (status = 404, description = "No profile yet"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiresApplicant(user): RequiresApplicant,
    Json(profile): Json<ApplicantProfileRequest>,
) -> Result<Json<ApplicantProfileResponse>> {
    let profile = PgApplicantService::new(state.db).update_profile(user.id, profile).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    post,
    path = "/applicant/applications",
    tag = "applicant",
    summary = "Apply to a job",
    request_body = ApplyRequest,
    responses(
        (status = 201, description = "Application submitted, status IN_REVIEW", body = JobApplicationResponse),
        (status = 400, description = "Profile not filled in yet"),
        (status = 404, description = "Job not found"),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn apply(
    State(state): State<AppState>,
    RequiresApplicant(user): RequiresApplicant,
    Json(request): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<JobApplicationResponse>)> {
    let application = PgApplicantService::new(state.db).apply(user.id, request).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// Jobs the caller applied to, with the application state
#[utoipa::path(
    get,
    path = "/applicant/applications",
    tag = "applicant",
    summary = "List applied jobs",
    params(ListAppliedJobsQuery),
    responses(
        (status = 200, description = "One page of applied jobs, most recent application first", body = Page<JobWithApplicantResponse>),
    ),
    security(("X-Jobboard-User" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_applied_jobs(
    State(state): State<AppState>,
    RequiresApplicant(user): RequiresApplicant,
    Query(query): Query<ListAppliedJobsQuery>,
) -> Result<Json<Page<JobWithApplicantResponse>>> {
    let page = PgApplicantService::new(state.db).list_applied_jobs(user.id, &query).await?;
    Ok(Json(page))
}

#[cfg(test)]
mod tests {
    use crate::api::models::{
        applicants::ApplicantProfileResponse,
        job_applications::{ApplicationStatus, JobApplicationResponse, JobWithApplicantResponse},
        pagination::Page,
    };
    use crate::test_utils::{auth_header, create_test_app, create_test_job, create_test_user};
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    fn profile_body(full_name: &str) -> serde_json::Value {
        json!({
            "full_name": full_name,
            "phone": "+1 555 0100",
            "address": "1 Navy Yard, Arlington VA",
            "resume_url": "https://cv.example.com/grace.pdf",
            "skills": "COBOL, compilers",
            "date_of_birth": "1986-12-09",
        })
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_profile_lifecycle(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let user = create_test_user(&pool, false).await;
        let (name, value) = auth_header(&user.email);

        app.get("/api/v1/applicant/profile")
            .add_header(&name, &value)
            .await
            .assert_status(StatusCode::NOT_FOUND);
        app.put("/api/v1/applicant/profile")
            .add_header(&name, &value)
            .json(&profile_body("Grace Hopper"))
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let response = app
            .post("/api/v1/applicant/profile")
            .add_header(&name, &value)
            .json(&profile_body("Grace Hopper"))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<ApplicantProfileResponse>().user_id, user.id);

        app.post("/api/v1/applicant/profile")
            .add_header(&name, &value)
            .json(&profile_body("Grace Hopper"))
            .await
            .assert_status(StatusCode::CONFLICT);

        let response = app
            .put("/api/v1/applicant/profile")
            .add_header(&name, &value)
            .json(&profile_body("Rear Admiral Hopper"))
            .await;
        response.assert_status_ok();

        let profile: ApplicantProfileResponse = app.get("/api/v1/applicant/profile").add_header(&name, &value).await.json();
        assert_eq!(profile.full_name, "Rear Admiral Hopper");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_profile_rejects_future_birth_date(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let user = create_test_user(&pool, false).await;
        let (name, value) = auth_header(&user.email);

        let mut body = profile_body("Marty McFly");
        body["date_of_birth"] = json!("2999-01-01");
        app.post("/api/v1/applicant/profile")
            .add_header(&name, &value)
            .json(&body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_apply_and_list_applied_jobs(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let recruiter = create_test_user(&pool, true).await;
        let backend = create_test_job(&pool, recruiter.id, "Backend Dev", "Remote").await;
        let frontend = create_test_job(&pool, recruiter.id, "Frontend Dev", "NYC").await;
        let user = create_test_user(&pool, false).await;
        let (name, value) = auth_header(&user.email);

        // Profile first
        let response = app
            .post("/api/v1/applicant/applications")
            .add_header(&name, &value)
            .json(&json!({"job_id": backend.id}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        app.post("/api/v1/applicant/profile")
            .add_header(&name, &value)
            .json(&profile_body("Grace Hopper"))
            .await
            .assert_status(StatusCode::CREATED);

        for job_id in [backend.id, frontend.id] {
            let response = app
                .post("/api/v1/applicant/applications")
                .add_header(&name, &value)
                .json(&json!({"job_id": job_id}))
                .await;
            response.assert_status(StatusCode::CREATED);
            assert_eq!(response.json::<JobApplicationResponse>().status, ApplicationStatus::InReview);
        }

        app.post("/api/v1/applicant/applications")
            .add_header(&name, &value)
            .json(&json!({"job_id": 999_999}))
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let response = app
            .get("/api/v1/applicant/applications?location=nyc")
            .add_header(&name, &value)
            .await;
        response.assert_status_ok();
        let page: Page<JobWithApplicantResponse> = response.json();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].job_id, frontend.id);
        assert_eq!(page.items[0].applicant_id, Some(user.id));

        let page: Page<JobWithApplicantResponse> = app
            .get("/api/v1/applicant/applications")
            .add_header(&name, &value)
            .await
            .json();
        assert_eq!(page.total_count, 2);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_recruiters_cannot_apply(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let recruiter = create_test_user(&pool, true).await;
        let (name, value) = auth_header(&recruiter.email);

        app.get("/api/v1/applicant/applications")
            .add_header(&name, &value)
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }
}
