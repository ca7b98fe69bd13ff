//! API request and response data models.
//!
//! API models are distinct from database models. Request bodies are validated while converting
//! into their database request (`into_db_request` and friends), before any query runs, and
//! problems are reported as [`Error::BadRequest`]. All models are
//! annotated with `utoipa` for the generated API docs.

use crate::errors::{Error, Result};

pub mod applicants;
pub mod job_applications;
pub mod job_types;
pub mod jobs;
pub mod pagination;
pub mod users;

/// Trim `value` and check it is non-empty and at most `max_len` characters.
pub(crate) fn required_text(field: &str, value: &str, max_len: usize) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::BadRequest {
            message: format!("{field} is required"),
        });
    }
    if value.chars().count() > max_len {
        return Err(Error::BadRequest {
            message: format!("{field} must be at most {max_len} characters"),
        });
    }
    Ok(value.to_string())
}

/// Like [`required_text`] for optional update fields.
pub(crate) fn optional_text(field: &str, value: Option<&str>, max_len: usize) -> Result<Option<String>> {
    value.map(|v| required_text(field, v, max_len)).transpose()
}
