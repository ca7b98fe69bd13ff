//! Database record models matching table schemas.
//!
//! These structs are what repositories accept and return. They are kept separate from the API
//! models in [`crate::api::models`] so storage and wire formats can evolve independently; the
//! conversions live next to the API types.
//!
//! - [`users`]: Accounts, with the recruiter role flag
//! - [`job_types`]: Job type lookup rows
//! - [`jobs`]: Job postings, with the legacy job type name joined in
//! - [`applicants`]: Applicant profiles keyed by user id
//! - [`job_applications`]: Applications and the wide job/application/applicant listing row

pub mod applicants;
pub mod job_applications;
pub mod job_types;
pub mod jobs;
pub mod users;
