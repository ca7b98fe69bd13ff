use crate::{
    AppState,
    api::models::users::CurrentUser,
    db::{errors::DbError, handlers::Users},
    errors::{Error, Result},
    types::{Operation, Resource},
};
use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::{debug, instrument, trace};

/// Resolve the email forwarded by the proxy to a stored user.
/// Returns:
/// - None: header missing or not valid UTF-8
/// - Some(Ok(user)): the email belongs to a registered user
/// - Some(Err(error)): the lookup failed, or no user has that email
#[instrument(skip(parts, state))]
async fn try_proxy_header_auth(parts: &Parts, state: &AppState) -> Option<Result<CurrentUser>> {
    let email = parts
        .headers
        .get(&state.config.auth.proxy_header.header_name)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|email| !email.is_empty())?;

    let mut conn = match state.db.acquire().await {
        Ok(conn) => conn,
        Err(e) => return Some(Err(DbError::from(e).into())),
    };

    match Users::new(&mut conn).get_user_by_email(email).await {
        Ok(Some(user)) => Some(Ok(user.into())),
        Ok(None) => Some(Err(Error::Unauthenticated {
            message: Some("Unknown user".to_string()),
        })),
        Err(e) => Some(Err(Error::Database(e))),
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    #[instrument(skip(parts, state))]
    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        match try_proxy_header_auth(parts, state).await {
            Some(Ok(user)) => {
                debug!("Found proxy header authenticated user: {}", user.id);
                Ok(user)
            }
            Some(Err(e)) => {
                trace!("Proxy header authentication failed: {:?}", e);
                Err(e)
            }
            None => {
                trace!("No authentication credentials found in request");
                Err(Error::Unauthenticated { message: None })
            }
        }
    }
}

/// A [`CurrentUser`] with the recruiter role
#[derive(Debug, Clone)]
pub struct RequiresRecruiter(pub CurrentUser);

impl FromRequestParts<AppState> for RequiresRecruiter {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_recruiter {
            return Err(Error::InsufficientPermissions {
                action: Operation::Access,
                resource: Resource::RecruiterApi,
            });
        }
        Ok(Self(user))
    }
}

/// A [`CurrentUser`] without the recruiter role
#[derive(Debug, Clone)]
pub struct RequiresApplicant(pub CurrentUser);

impl FromRequestParts<AppState> for RequiresApplicant {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if user.is_recruiter {
            return Err(Error::InsufficientPermissions {
                action: Operation::Access,
                resource: Resource::ApplicantApi,
            });
        }
        Ok(Self(user))
    }
}
