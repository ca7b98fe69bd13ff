//! Shared fixtures for database and HTTP tests.

use crate::{
    config::{Config, DatabaseConfig, PasswordConfig, PoolSettings},
    db::{
        handlers::{Applicants, Jobs, Users},
        models::{
            applicants::{ApplicantCreateDBRequest, ApplicantDBResponse},
            jobs::{JobCreateDBRequest, JobDBResponse},
            users::{UserCreateDBRequest, UserDBResponse},
        },
    },
    types::UserId,
};
use axum_test::TestServer;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_USER: AtomicU64 = AtomicU64::new(1);

pub async fn create_test_app(pool: PgPool) -> TestServer {
    let config = create_test_config();

    let app = crate::Application::new_with_pool(config, Some(pool))
        .await
        .expect("Failed to create application");

    app.into_test_server()
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig {
            // Unused: tests hand the application a pool
            url: "postgres://unused".to_string(),
            pool: PoolSettings {
                max_connections: 2,
                ..Default::default()
            },
        },
        auth: crate::config::AuthConfig {
            password: PasswordConfig {
                // Cheap hashing keeps the tests fast
                argon2_memory_kib: 1024,
                argon2_iterations: 1,
                ..Default::default()
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Header the test proxy would set for `email`
pub fn auth_header(email: &str) -> (String, String) {
    (
        create_test_config().auth.proxy_header.header_name,
        email.to_string(),
    )
}

pub async fn create_test_user(pool: &PgPool, is_recruiter: bool) -> UserDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let n = NEXT_USER.fetch_add(1, Ordering::Relaxed);
    let role = if is_recruiter { "recruiter" } else { "applicant" };

    Users::new(&mut conn)
        .create(&UserCreateDBRequest {
            email: format!("{role}_{}_{n}@example.com", std::process::id()),
            password_hash: "not-a-real-hash".to_string(),
            is_recruiter,
        })
        .await
        .expect("Failed to create test user")
}

pub async fn create_test_job(pool: &PgPool, recruiter_id: UserId, title: &str, location: &str) -> JobDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Jobs::new(&mut conn)
        .create(&JobCreateDBRequest {
            title: title.to_string(),
            description: format!("{title} in {location}"),
            location: location.to_string(),
            salary: Decimal::new(60_000, 0),
            category: "Engineering".to_string(),
            job_type_id: None,
            recruiter_id,
        })
        .await
        .expect("Failed to create test job")
}

/// A non-recruiter user with a saved profile
pub async fn create_test_applicant(pool: &PgPool, full_name: &str) -> ApplicantDBResponse {
    let user = create_test_user(pool, false).await;
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Applicants::new(&mut conn)
        .create(&ApplicantCreateDBRequest {
            user_id: user.id,
            full_name: full_name.to_string(),
            phone: "+1 555 0100".to_string(),
            address: "1 Main St".to_string(),
            resume_url: "https://cv.example.com/resume.pdf".to_string(),
            skills: "Rust, SQL".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
        })
        .await
        .expect("Failed to create test applicant")
}

