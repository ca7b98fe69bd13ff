//! Axum route handlers, grouped by actor.
//!
//! Handlers are thin: they extract the caller and the request, build the matching service from
//! the shared pool, and map the result onto a status code.
//!
//! - [`auth`]: registration and login
//! - [`jobs`]: the public job board and job type lookups
//! - [`recruiter`]: job postings, applicant review, job type management
//! - [`applicant`]: profile, applications, applied-jobs listing

pub mod applicant;
pub mod auth;
pub mod jobs;
pub mod recruiter;
