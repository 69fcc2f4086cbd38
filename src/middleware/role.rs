//! Role-based authorization for Axum.
//!
//! 1. Layer-based guards (`require_super_admin`, `require_facility_admin`)
//!    used with `axum::middleware::from_fn_with_state`
//! 2. [`check_any_role`] for checks inside controller logic
//!
//! Rejections are 401 with a fixed message; the principal's actual role is
//! only logged.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use nomad_auth::UserRole;
use nomad_core::AppError;

use crate::metrics::track_authorization_check;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub const NOT_AUTHORIZED: &str = "You are not authorized to perform this action";

/// Roles allowed to list accommodation facilities.
pub const FACILITY_ADMINS: &[UserRole] = &[
    UserRole::TravelAdmin,
    UserRole::SuperAdmin,
    UserRole::Manager,
];

pub const SUPER_ADMINS: &[UserRole] = &[UserRole::SuperAdmin];

/// Checks the principal's role against `allowed_roles`.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    let allowed = auth_user.has_any_role(allowed_roles);
    track_authorization_check(allowed, auth_user.role().as_str());

    if !allowed {
        tracing::warn!(
            user_id = %auth_user.user_id(),
            role = %auth_user.role(),
            required = ?allowed_roles,
            "Role guard rejected request"
        );
        return Err(AppError::unauthorized(NOT_AUTHORIZED));
    }

    Ok(())
}

/// Middleware that lets the request through only when the authenticated user
/// holds one of `allowed_roles`.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::role::{require_roles, SUPER_ADMINS};
///
/// let protected_routes = Router::new()
///     .route("/role", patch(update_role))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| require_roles(state, req, next, SUPER_ADMINS),
///     ));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: &'static [UserRole],
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_any_role(&auth_user, allowed_roles)?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}

pub async fn require_super_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(State(state), req, next, SUPER_ADMINS).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Guard for facility creation (travel admins, managers, super admins).
pub async fn require_facility_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(State(state), req, next, FACILITY_ADMINS).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
