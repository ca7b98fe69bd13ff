//! Database repository for applicant profiles.
//!
//! Profiles are addressed by the owning user's id rather than their surrogate key: each
//! non-recruiter user has at most one.

use crate::db::{
    errors::Result,
    models::applicants::{ApplicantCreateDBRequest, ApplicantDBResponse, ApplicantUpdateDBRequest},
};
use crate::types::UserId;
use sqlx::PgConnection;
use tracing::instrument;

const APPLICANT_COLUMNS: &str =
    "id, applicant_id, full_name, phone, address, resume_url, skills, date_of_birth, created_at, updated_at";

pub struct Applicants<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Applicants<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_user_id(&mut self, user_id: UserId) -> Result<Option<ApplicantDBResponse>> {
        let profile = sqlx::query_as::<_, ApplicantDBResponse>(&format!(
            "SELECT {APPLICANT_COLUMNS} FROM applicants WHERE applicant_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(profile)
    }

    /// Fails with a unique violation if the user already has a profile.
    #[instrument(skip(self, request), fields(user_id = request.user_id), err)]
    pub async fn create(&mut self, request: &ApplicantCreateDBRequest) -> Result<ApplicantDBResponse> {
        let profile = sqlx::query_as::<_, ApplicantDBResponse>(&format!(
            r#"
            INSERT INTO applicants (applicant_id, full_name, phone, address, resume_url, skills, date_of_birth)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {APPLICANT_COLUMNS}
            "#
        ))
        .bind(request.user_id)
        .bind(&request.full_name)
        .bind(&request.phone)
        .bind(&request.address)
        .bind(&request.resume_url)
        .bind(&request.skills)
        .bind(request.date_of_birth)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(profile)
    }

    /// Returns `None` when the user has no profile yet.
    #[instrument(skip(self, request), err)]
    pub async fn update_by_user_id(
        &mut self,
        user_id: UserId,
        request: &ApplicantUpdateDBRequest,
    ) -> Result<Option<ApplicantDBResponse>> {
        let profile = sqlx::query_as::<_, ApplicantDBResponse>(&format!(
            r#"
            UPDATE applicants SET
                full_name = $2,
                phone = $3,
                address = $4,
                resume_url = $5,
                skills = $6,
                date_of_birth = $7,
                updated_at = NOW()
            WHERE applicant_id = $1
            RETURNING {APPLICANT_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(&request.full_name)
        .bind(&request.phone)
        .bind(&request.address)
        .bind(&request.resume_url)
        .bind(&request.skills)
        .bind(request.date_of_birth)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(profile)
    }
}
