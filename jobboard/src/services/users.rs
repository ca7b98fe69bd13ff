//! Registration and credential checks.
//!
//! There is no session handling here: login only verifies the credentials and returns the user.
//! Requests are authenticated by the front proxy, see [`crate::auth`].

use crate::{
    api::models::users::{LoginRequest, RegisterRequest, UserResponse},
    auth::password,
    config::PasswordConfig,
    db::{handlers::Users, models::users::UserCreateDBRequest},
    errors::{Error, Result},
};
use sqlx::PgPool;
use tracing::instrument;

const EMAIL_MAX_LEN: usize = 254;

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<UserResponse>;

    /// The user with these credentials, or [`Error::Unauthenticated`].
    async fn authenticate(&self, request: LoginRequest) -> Result<UserResponse>;
}

pub struct PgUserService {
    db: PgPool,
    password: PasswordConfig,
}

impl PgUserService {
    pub fn new(db: PgPool, password: PasswordConfig) -> Self {
        Self { db, password }
    }

    fn validate_password(&self, password: &str) -> Result<()> {
        let length = password.chars().count();
        if length < self.password.min_length {
            return Err(Error::BadRequest {
                message: format!("Password must be at least {} characters", self.password.min_length),
            });
        }
        if length > self.password.max_length {
            return Err(Error::BadRequest {
                message: format!("Password must be no more than {} characters", self.password.max_length),
            });
        }
        Ok(())
    }
}

/// Trim and lowercase an email, rejecting anything without a local part and a domain.
fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid || email.len() > EMAIL_MAX_LEN {
        return Err(Error::BadRequest {
            message: "Invalid email address".to_string(),
        });
    }
    Ok(email)
}

fn invalid_credentials() -> Error {
    Error::Unauthenticated {
        message: Some("Invalid email or password".to_string()),
    }
}

#[async_trait::async_trait]
impl UserService for PgUserService {
    #[instrument(skip_all, fields(is_recruiter = request.is_recruiter), err)]
    async fn register(&self, request: RegisterRequest) -> Result<UserResponse> {
        let email = normalize_email(&request.email)?;
        self.validate_password(&request.password)?;

        let password = request.password;
        let params = self.password.argon2_params();
        let password_hash = tokio::task::spawn_blocking(move || password::hash_password_with_params(&password, Some(params)))
            .await
            .map_err(|e| Error::Internal {
                operation: format!("spawn password hashing task: {e}"),
            })??;

        // A taken email surfaces as DbError::EmailTaken from the unique constraint
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let created = Users::new(&mut conn)
            .create(&UserCreateDBRequest {
                email,
                password_hash,
                is_recruiter: request.is_recruiter,
            })
            .await?;

        Ok(created.into())
    }

    #[instrument(skip_all, err)]
    async fn authenticate(&self, request: LoginRequest) -> Result<UserResponse> {
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let user = Users::new(&mut conn)
            .get_user_by_email(&request.email)
            .await?
            .ok_or_else(invalid_credentials)?;

        let password = request.password;
        let hash = user.password_hash.clone();
        let is_valid = tokio::task::spawn_blocking(move || password::verify_password(&password, &hash))
            .await
            .map_err(|e| Error::Internal {
                operation: format!("spawn password verification task: {e}"),
            })??;

        if !is_valid {
            return Err(invalid_credentials());
        }

        Ok(user.into())
    }
}
