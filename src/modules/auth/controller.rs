use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use nomad_core::{ApiResponse, AppError};
use nomad_models::{AuthenticatedUser, LoginRequest, MessageData, SignupRequest};

use crate::modules::auth::service::{AuthService, INCORRECT_CREDENTIALS};
use crate::state::AppState;
use crate::validator::{ValidatedBody, ValidatedJson};

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User registered; a verification email is sent", body = AuthenticatedUser),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Field validation errors")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedBody(dto): ValidatedBody<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthenticatedUser>>), AppError> {
    let data = AuthService::signup(&state.db, dto, &state.jwt_config, &state.email_config).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

/// Sign in and receive a session token
///
/// Any malformed body or credential mismatch is reported the same way.
#[utoipa::path(
    post,
    path = "/api/v1/auth/signin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthenticatedUser),
        (status = 401, description = "Incorrect email or password")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn signin(
    State(state): State<AppState>,
    body: Result<ValidatedJson<LoginRequest>, AppError>,
) -> Result<Json<ApiResponse<AuthenticatedUser>>, AppError> {
    let ValidatedJson(dto) = body.map_err(|e| {
        tracing::debug!(reason = %e.error, "Rejected signin body");
        AppError::invalid_credentials(INCORRECT_CREDENTIALS)
    })?;

    let data = AuthService::signin(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(ApiResponse::success(data)))
}

/// Verify an email address from the link sent at signup
#[utoipa::path(
    get,
    path = "/api/v1/auth/verify/{token}",
    params(("token" = String, Path, description = "Verification token from the signup email")),
    responses(
        (status = 200, description = "Email verified", body = MessageData),
        (status = 401, description = "Invalid or expired token"),
        (status = 404, description = "User not found")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn verify_email(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ApiResponse<MessageData>>, AppError> {
    let data = AuthService::verify_email(&state.db, &token, &state.jwt_config).await?;
    Ok(Json(ApiResponse::success(data)))
}
