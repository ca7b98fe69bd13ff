//! OpenAPI documentation for the job board API.
//!
//! Handlers under `/api/v1` are documented relative to that server. The authentication
//! routes live at the root and get their own server entry.

use utoipa::{
    Modify, OpenApi,
    openapi::{
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        server::Server,
    },
};

use crate::api;

/// Proxy header security scheme, plus the root server for `/authentication/*`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "X-Jobboard-User".to_string(),
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "x-jobboard-user",
                    "Email of the signed-in user, set by the authenticating proxy in front of this service.",
                ))),
            );
        }

        for (path, item) in openapi.paths.paths.iter_mut() {
            if path.starts_with("/authentication") {
                item.servers = Some(vec![Server::new("/")]);
            }
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    servers(
        (url = "/api/v1", description = "Job board API")
    ),
    modifiers(&SecurityAddon),
    paths(
        api::handlers::auth::register,
        api::handlers::auth::login,
        api::handlers::jobs::list_jobs,
        api::handlers::jobs::get_job,
        api::handlers::jobs::list_job_types,
        api::handlers::jobs::get_job_type,
        api::handlers::recruiter::list_my_jobs,
        api::handlers::recruiter::create_job,
        api::handlers::recruiter::update_job,
        api::handlers::recruiter::delete_job,
        api::handlers::recruiter::list_job_applicants,
        api::handlers::recruiter::update_application_status,
        api::handlers::recruiter::create_job_type,
        api::handlers::recruiter::update_job_type,
        api::handlers::recruiter::delete_job_type,
        api::handlers::applicant::get_profile,
        api::handlers::applicant::create_profile,
        api::handlers::applicant::update_profile,
        api::handlers::applicant::apply,
        api::handlers::applicant::list_applied_jobs,
    ),
    components(
        schemas(
            api::models::users::RegisterRequest,
            api::models::users::LoginRequest,
            api::models::users::UserResponse,
            api::models::jobs::JobCreate,
            api::models::jobs::JobUpdate,
            api::models::jobs::JobResponse,
            api::models::job_types::JobTypeCreate,
            api::models::job_types::JobTypeUpdate,
            api::models::job_types::JobTypeResponse,
            api::models::applicants::ApplicantProfileRequest,
            api::models::applicants::ApplicantProfileResponse,
            api::models::job_applications::ApplicationStatus,
            api::models::job_applications::ApplyRequest,
            api::models::job_applications::UpdateStatusRequest,
            api::models::job_applications::JobApplicationResponse,
            api::models::job_applications::JobWithApplicantResponse,
        )
    ),
    tags(
        (name = "authentication", description = "Registration and credential checks"),
        (name = "jobs", description = "Public job board"),
        (name = "job types", description = "Legacy job type lookups"),
        (name = "recruiter", description = "Job postings and applicant review"),
        (name = "applicant", description = "Profile and applications"),
    ),
    info(
        title = "Job Board API",
        description = "Post jobs, apply to them, and review applications.",
    )
)]
pub struct ApiDoc;
