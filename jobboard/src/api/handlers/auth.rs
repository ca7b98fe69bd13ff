use crate::{
    AppState,
    api::models::users::{LoginRequest, RegisterRequest, UserResponse},
    errors::Result,
    services::{PgUserService, UserService},
};
use axum::{Json, extract::State, http::StatusCode};

fn user_service(state: &AppState) -> PgUserService {
    PgUserService::new(state.db.clone(), state.config.auth.password.clone())
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/authentication/register",
    tag = "authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Invalid email or password"),
        (status = 409, description = "Email already registered"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let user = user_service(&state).register(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Check credentials. Returns the user; sessions are handled by the front proxy.
#[utoipa::path(
    post,
    path = "/authentication/login",
    tag = "authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials are valid", body = UserResponse),
        (status = 401, description = "Invalid credentials"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Result<Json<UserResponse>> {
    let user = user_service(&state).authenticate(request).await?;
    Ok(Json(user))
}
