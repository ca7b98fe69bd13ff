//! Common type definitions.
//!
//! # ID Types
//!
//! All entity IDs are database-assigned `BIGSERIAL` values wrapped in type aliases:
//!
//! - [`UserId`]: User account identifier. Also the key of an applicant profile
//!   (`applicants.applicant_id`) and of `job_applications.applicant_id`.
//! - [`JobId`]: Job posting identifier
//! - [`JobTypeId`]: Job type lookup identifier
//! - [`ApplicantProfileId`]: Surrogate key of an applicant profile row
//! - [`ApplicationId`]: Job application identifier
//!
//! # Access Control
//!
//! Authorization is role-based (recruiter vs applicant) plus ownership checks on jobs.
//! [`Operation`] and [`Resource`] describe a refused action in error messages.

use std::fmt;

pub type UserId = i64;
pub type JobId = i64;
pub type JobTypeId = i64;
pub type ApplicantProfileId = i64;
pub type ApplicationId = i64;

// Operations that can be refused. *-Own means restricted to the caller's own instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ReadOwn,
    UpdateOwn,
    DeleteOwn,
    // Role-gated endpoint groups
    Access,
}

// Resources that can be operated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Jobs,
    Applications,
    RecruiterApi,
    ApplicantApi,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ReadOwn => write!(f, "Read"),
            Operation::UpdateOwn => write!(f, "Update"),
            Operation::DeleteOwn => write!(f, "Delete"),
            Operation::Access => write!(f, "Access"),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Jobs => write!(f, "jobs"),
            Resource::Applications => write!(f, "job applications"),
            Resource::RecruiterApi => write!(f, "recruiter endpoints"),
            Resource::ApplicantApi => write!(f, "applicant endpoints"),
        }
    }
}
