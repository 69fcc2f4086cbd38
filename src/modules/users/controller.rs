use axum::{Json, extract::State};
use tracing::instrument;

use nomad_core::{ApiResponse, AppError};
use nomad_models::{RoleAssignmentRequest, User};

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedBody;

/// Assign a role to a user (super admin only)
#[utoipa::path(
    patch,
    path = "/api/v1/user/role",
    request_body = RoleAssignmentRequest,
    responses(
        (status = 200, description = "Role updated", body = User),
        (status = 401, description = "Missing or invalid token, or not a super admin"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Field validation errors")
    ),
    tag = "Users",
    security(("access_token" = []))
)]
#[instrument(skip(state, dto), fields(admin_id = %auth_user.user_id(), target = %dto.email))]
pub async fn update_role(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedBody(dto): ValidatedBody<RoleAssignmentRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = UserService::update_role(&state.db, &dto.email, dto.role).await?;

    tracing::info!(user_id = %user.id, role = %user.role, "User role updated");

    Ok(Json(ApiResponse::success(user)))
}
