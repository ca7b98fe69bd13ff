//! # jobboard: Recruitment Job Board Backend
//!
//! `jobboard` is the HTTP backend of a recruitment site. Recruiters post jobs and review the
//! people who applied to them; applicants keep a profile and apply to jobs; anyone can browse
//! the board.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and
//! uses PostgreSQL through [sqlx] for persistence. Requests flow through three layers:
//!
//! - [`api::handlers`]: extract the caller and the request, call a service, pick a status code
//! - [`services`]: one trait per actor (job board, recruiter, applicant, users) with a Postgres
//!   implementation that owns transactions and authorization checks
//! - [`db::handlers`]: repositories over a single `&mut PgConnection`, including the filtered and
//!   paginated job and job-application queries
//!
//! Paginated reads run the count and the page query inside one read-only snapshot transaction,
//! so `total_count` always agrees with the rows returned.
//!
//! ## Authentication
//!
//! Sign-in is handled by a proxy in front of this service, which forwards the user's email in a
//! configurable header (`x-jobboard-user` by default). The service resolves that email to a
//! stored user and checks the recruiter flag. `/authentication/register` and
//! `/authentication/login` manage the stored accounts and their Argon2 password hashes.
//!
//! ## Getting Started
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/jobboard cargo run -- -f config.yaml
//! ```
//!
//! The API documentation is served at `/docs`.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod openapi;
pub mod services;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use crate::config::CorsOrigin;
use crate::openapi::ApiDoc;
use axum::{
    Json, Router,
    http::HeaderValue,
    routing::{get, patch, post},
};
use bon::Builder;
pub use config::Config;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Application state shared across all request handlers.
///
/// Services are built per request from `db`, so this stays cheap to clone.
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the jobboard database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    // A '*' entry widens the whole list; config validation keeps it away from credentials
    let origins = if config.cors.allowed_origins.iter().any(|o| matches!(o, CorsOrigin::Wildcard)) {
        AllowOrigin::any()
    } else {
        let mut origins = Vec::new();
        for origin in &config.cors.allowed_origins {
            if let CorsOrigin::Url(url) = origin {
                origins.push(url.origin().ascii_serialization().parse::<HeaderValue>()?);
            }
        }
        AllowOrigin::list(origins)
    };

    let mut cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.cors.allow_credentials);

    if let Some(max_age) = config.cors.max_age {
        cors = cors.max_age(std::time::Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the application router: authentication at the root, the job board API under
/// `/api/v1`, health and documentation routes, then CORS and request tracing.
///
/// # Errors
///
/// Returns an error if the CORS configuration cannot be turned into header values.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    // Authentication routes (at root level)
    let auth_routes = Router::new()
        .route("/authentication/register", post(api::handlers::auth::register))
        .route("/authentication/login", post(api::handlers::auth::login))
        .with_state(state.clone());

    let api_routes = Router::new()
        // Public board
        .route("/jobs", get(api::handlers::jobs::list_jobs))
        .route("/jobs/{id}", get(api::handlers::jobs::get_job))
        .route("/job-types", get(api::handlers::jobs::list_job_types))
        .route("/job-types/{id}", get(api::handlers::jobs::get_job_type))
        // Recruiter
        .route(
            "/recruiter/jobs",
            get(api::handlers::recruiter::list_my_jobs).post(api::handlers::recruiter::create_job),
        )
        .route(
            "/recruiter/jobs/{id}",
            patch(api::handlers::recruiter::update_job).delete(api::handlers::recruiter::delete_job),
        )
        .route(
            "/recruiter/jobs/{id}/applicants",
            get(api::handlers::recruiter::list_job_applicants),
        )
        .route(
            "/recruiter/applications/{id}",
            patch(api::handlers::recruiter::update_application_status),
        )
        .route("/recruiter/job-types", post(api::handlers::recruiter::create_job_type))
        .route(
            "/recruiter/job-types/{id}",
            patch(api::handlers::recruiter::update_job_type).delete(api::handlers::recruiter::delete_job_type),
        )
        // Applicant
        .route(
            "/applicant/profile",
            get(api::handlers::applicant::get_profile)
                .post(api::handlers::applicant::create_profile)
                .put(api::handlers::applicant::update_profile),
        )
        .route(
            "/applicant/applications",
            get(api::handlers::applicant::list_applied_jobs).post(api::handlers::applicant::apply),
        )
        .with_state(state.clone());

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(auth_routes)
        .nest("/api/v1", api_routes)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let cors_layer = create_cors_layer(&state.config)?;
    let router = router.layer(cors_layer);

    // Add tracing layer
    let router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    let settings = &config.database.pool;
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .idle_timeout(settings.idle_timeout())
        .max_lifetime(settings.max_lifetime())
        .connect(&config.database.url)
        .await?;
    info!(
        "Connected to database (max_connections: {})",
        settings.max_connections
    );
    Ok(pool)
}

pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Connect to the configured database, run migrations and build the router
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_pool(config, None).await
    }

    /// Like [`Application::new`], but reuse `pool` when given instead of connecting
    pub async fn new_with_pool(config: Config, pool: Option<PgPool>) -> anyhow::Result<Self> {
        debug!("Starting job board with configuration: {:#?}", config);

        let pool = match pool {
            Some(pool) => pool,
            None => connect(&config).await?,
        };
        migrator().run(&pool).await?;

        let app_state = AppState::builder().db(pool.clone()).config(config.clone()).build();
        let router = build_router(app_state)?;

        Ok(Self { router, config, pool })
    }

    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router.into_make_service()).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Job board listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        // Run the server with graceful shutdown
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
