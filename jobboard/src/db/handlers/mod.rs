//! Repository implementations for database access.
//!
//! Each repository wraps a borrowed `PgConnection` (usually a transaction), binds every
//! parameter, and returns models from [`crate::db::models`].
//!
//! - [`Users`]: Accounts and credential lookup
//! - [`JobTypes`]: Job type lookup list
//! - [`Jobs`]: Job postings, filtered and paginated listings
//! - [`Applicants`]: Applicant profiles
//! - [`JobApplications`]: Applications and the joined applicant/applied-job listings
//! - [`filters`]: Shared title/location "contains" predicates
//!
//! ```ignore
//! use jobboard::db::handlers::Jobs;
//!
//! let mut tx = pool.begin().await?;
//! let job = Jobs::new(&mut tx).get_by_id(job_id).await?;
//! tx.commit().await?;
//! ```

pub mod applicants;
pub mod filters;
pub mod job_applications;
pub mod job_types;
pub mod jobs;
pub mod users;

pub use applicants::Applicants;
pub use job_applications::{JobApplicationFilter, JobApplications};
pub use job_types::{JobTypeFilter, JobTypes};
pub use jobs::{JobFilter, Jobs};
pub use users::Users;
