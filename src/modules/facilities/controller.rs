use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use nomad_core::{ApiResponse, AppError, NoticeResponse};
use nomad_models::{CreateFacilityDto, Facility};

use crate::metrics::track_facility_created;
use crate::middleware::auth::AuthUser;
use crate::modules::facilities::service::FacilityService;
use crate::state::AppState;
use crate::validator::ValidatedBody;

pub const NO_FACILITIES: &str = "There is no facilities listed on barefoot nomad at this time";

/// List an accommodation facility
#[utoipa::path(
    post,
    path = "/api/v1/facilities",
    request_body = CreateFacilityDto,
    responses(
        (status = 201, description = "Facility created", body = Facility),
        (status = 401, description = "Missing or invalid token, or role not allowed"),
        (status = 422, description = "Empty body or field validation errors")
    ),
    tag = "Facilities",
    security(("access_token" = []))
)]
#[instrument(skip(state, dto), fields(user_id = %auth_user.user_id()))]
pub async fn create_facility(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedBody(dto): ValidatedBody<CreateFacilityDto>,
) -> Result<(StatusCode, Json<ApiResponse<Facility>>), AppError> {
    let facility = FacilityService::create_facility(&state.db, auth_user.user_id(), dto).await?;

    track_facility_created(auth_user.role().as_str());
    tracing::info!(facility_id = %facility.id, "Facility created");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(facility))))
}

/// List all accommodation facilities
///
/// An empty listing is reported as 404 with a success status.
#[utoipa::path(
    get,
    path = "/api/v1/facilities",
    responses(
        (status = 200, description = "Facilities, oldest first", body = Vec<Facility>),
        (status = 404, description = "No facilities listed yet")
    ),
    tag = "Facilities"
)]
#[instrument(skip(state))]
pub async fn list_facilities(State(state): State<AppState>) -> Result<Response, AppError> {
    let facilities = FacilityService::list_facilities(&state.db).await?;

    if facilities.is_empty() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(NoticeResponse::success(NO_FACILITIES)),
        )
            .into_response());
    }

    Ok(Json(ApiResponse::success(facilities)).into_response())
}
