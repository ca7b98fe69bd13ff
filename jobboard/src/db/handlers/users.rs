//! Database repository for users.

use crate::db::{
    errors::Result,
    models::users::{UserCreateDBRequest, UserDBResponse},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Users<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Users<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(email = %request.email, is_recruiter = request.is_recruiter), err)]
    pub async fn create(&mut self, request: &UserCreateDBRequest) -> Result<UserDBResponse> {
        let user = sqlx::query_as::<_, UserDBResponse>(
            r#"
            INSERT INTO users (email, password_hash, is_recruiter)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, is_recruiter, created_at
            "#,
        )
        .bind(&request.email)
        .bind(&request.password_hash)
        .bind(request.is_recruiter)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(user)
    }

    /// Emails are stored lowercased, so the lookup is case-insensitive.
    #[instrument(skip(self), err)]
    pub async fn get_user_by_email(&mut self, email: &str) -> Result<Option<UserDBResponse>> {
        let user = sqlx::query_as::<_, UserDBResponse>(
            "SELECT id, email, password_hash, is_recruiter, created_at FROM users WHERE email = LOWER($1)",
        )
        .bind(email.trim())
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(user)
    }
}
