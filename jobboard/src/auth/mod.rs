//! Authentication and authorization.
//!
//! Sessions and tokens are handled by a trusted front proxy. It authenticates the caller and
//! forwards their email in a header (`auth.proxy_header.header_name`, `x-jobboard-user` by
//! default); [`current_user`] resolves that email to a stored user on every request.
//!
//! Authorization is by role: handlers take [`current_user::RequiresRecruiter`] or
//! [`current_user::RequiresApplicant`] instead of a bare [`CurrentUser`](crate::api::models::users::CurrentUser)
//! when the route belongs to one actor. Ownership of jobs is checked in the services.
//!
//! ```ignore
//! async fn my_jobs(RequiresRecruiter(user): RequiresRecruiter) -> Result<String> {
//!     Ok(format!("jobs for {}", user.email))
//! }
//! ```
//!
//! [`password`] hashes and verifies credentials for registration and login.

pub mod current_user;
pub mod password;
