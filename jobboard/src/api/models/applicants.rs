//! API request/response models for applicant profiles.

use super::required_text;
use crate::db::models::applicants::{ApplicantCreateDBRequest, ApplicantDBResponse, ApplicantUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::{ApplicantProfileId, UserId};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const FULL_NAME_MAX_LEN: usize = 100;
pub const PHONE_MAX_LEN: usize = 100;
pub const ADDRESS_MAX_LEN: usize = 500;
pub const RESUME_URL_MAX_LEN: usize = 500;
pub const SKILLS_MAX_LEN: usize = 100;

/// Applicant profile fields, used both to create and to replace a profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicantProfileRequest {
    #[schema(example = "Grace Hopper")]
    pub full_name: String,
    #[schema(example = "+1 555 0100")]
    pub phone: String,
    #[schema(example = "1 Navy Yard, Arlington VA")]
    pub address: String,
    /// Link to a resume stored elsewhere
    #[schema(example = "https://cv.example.com/grace.pdf")]
    pub resume_url: String,
    #[schema(example = "COBOL, compilers")]
    pub skills: String,
    pub date_of_birth: NaiveDate,
}

/// Validated, trimmed profile fields
struct ProfileFields {
    full_name: String,
    phone: String,
    address: String,
    resume_url: String,
    skills: String,
    date_of_birth: NaiveDate,
}

impl ApplicantProfileRequest {
    fn validate(self) -> Result<ProfileFields> {
        if self.date_of_birth >= Utc::now().date_naive() {
            return Err(Error::BadRequest {
                message: "Date of birth must be in the past".to_string(),
            });
        }

        Ok(ProfileFields {
            full_name: required_text("Full name", &self.full_name, FULL_NAME_MAX_LEN)?,
            phone: required_text("Phone", &self.phone, PHONE_MAX_LEN)?,
            address: required_text("Address", &self.address, ADDRESS_MAX_LEN)?,
            resume_url: required_text("Resume URL", &self.resume_url, RESUME_URL_MAX_LEN)?,
            skills: required_text("Skills", &self.skills, SKILLS_MAX_LEN)?,
            date_of_birth: self.date_of_birth,
        })
    }

    pub fn into_create_request(self, user_id: UserId) -> Result<ApplicantCreateDBRequest> {
        let fields = self.validate()?;
        Ok(ApplicantCreateDBRequest {
            user_id,
            full_name: fields.full_name,
            phone: fields.phone,
            address: fields.address,
            resume_url: fields.resume_url,
            skills: fields.skills,
            date_of_birth: fields.date_of_birth,
        })
    }

    pub fn into_update_request(self) -> Result<ApplicantUpdateDBRequest> {
        let fields = self.validate()?;
        Ok(ApplicantUpdateDBRequest {
            full_name: fields.full_name,
            phone: fields.phone,
            address: fields.address,
            resume_url: fields.resume_url,
            skills: fields.skills,
            date_of_birth: fields.date_of_birth,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicantProfileResponse {
    pub id: ApplicantProfileId,
    /// Owning user
    pub user_id: UserId,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub resume_url: String,
    pub skills: String,
    pub date_of_birth: NaiveDate,
}

impl From<ApplicantDBResponse> for ApplicantProfileResponse {
    fn from(db: ApplicantDBResponse) -> Self {
        Self {
            id: db.id,
            user_id: db.applicant_id,
            full_name: db.full_name,
            phone: db.phone,
            address: db.address,
            resume_url: db.resume_url,
            skills: db.skills,
            date_of_birth: db.date_of_birth,
        }
    }
}
