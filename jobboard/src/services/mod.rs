//! Business logic, one service per actor.
//!
//! Each service is an async trait with a PostgreSQL implementation built from the shared pool.
//! Handlers construct the implementation per request; services own the transaction boundary
//! and turn repository results into API models and [`Error`](crate::errors::Error)s.
//!
//! - [`JobBoardService`]: anonymous reads of the job board and job type lookup list
//! - [`RecruiterService`]: a recruiter's own jobs, their applicants, and job types
//! - [`ApplicantService`]: profile management, applying, and the applied-jobs listing
//! - [`UserService`]: registration and credential checks

pub mod applicant;
pub mod job_board;
pub mod recruiter;
pub mod users;

pub use applicant::{ApplicantService, PgApplicantService};
pub use job_board::{JobBoardService, PgJobBoardService};
pub use recruiter::{PgRecruiterService, RecruiterService};
pub use users::{PgUserService, UserService};

use crate::errors::Error;

fn job_not_found(id: crate::types::JobId) -> Error {
    Error::NotFound {
        resource: "Job".to_string(),
        id: id.to_string(),
    }
}
