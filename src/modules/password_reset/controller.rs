use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use nomad_core::{ApiResponse, AppError};
use nomad_models::{MessageData, NewPasswordRequest, PasswordResetData, PasswordResetRequest};

use crate::modules::password_reset::service::PasswordResetService;
use crate::state::AppState;
use crate::validator::ValidatedBody;

/// Request a password reset link
#[utoipa::path(
    post,
    path = "/api/v1/password-reset",
    request_body = PasswordResetRequest,
    responses(
        (status = 200, description = "Reset link sent", body = PasswordResetData),
        (status = 404, description = "user email not found"),
        (status = 422, description = "Field validation errors")
    ),
    tag = "Password Reset"
)]
#[instrument(skip(state, dto))]
pub async fn request_password_reset(
    State(state): State<AppState>,
    ValidatedBody(dto): ValidatedBody<PasswordResetRequest>,
) -> Result<Json<ApiResponse<PasswordResetData>>, AppError> {
    let data = PasswordResetService::request_reset(
        &state.db,
        &dto.email,
        &state.jwt_config,
        &state.email_config,
    )
    .await?;

    Ok(Json(ApiResponse::success(data)))
}

/// Set a new password using the emailed reset token
#[utoipa::path(
    patch,
    path = "/api/v1/password-reset/{token}",
    params(("token" = String, Path, description = "Reset token from the email link")),
    request_body = NewPasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = MessageData),
        (status = 401, description = "Invalid or expired token"),
        (status = 422, description = "Field validation errors")
    ),
    tag = "Password Reset"
)]
#[instrument(skip_all)]
pub async fn reset_password(
    State(state): State<AppState>,
    Path(token): Path<String>,
    ValidatedBody(dto): ValidatedBody<NewPasswordRequest>,
) -> Result<Json<ApiResponse<MessageData>>, AppError> {
    let data = PasswordResetService::reset_password(
        &state.db,
        &token,
        dto.password,
        &state.jwt_config,
        &state.email_config,
    )
    .await?;

    Ok(Json(ApiResponse::success(data)))
}
