use axum::{Router, middleware, routing::post};

use crate::middleware::auth::authenticate;
use crate::middleware::role::require_facility_admin;
use crate::modules::facilities::controller::{create_facility, list_facilities};
use crate::state::AppState;

pub fn init_facilities_router(state: AppState) -> Router<AppState> {
    let create = post(create_facility)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_facility_admin,
        ))
        .route_layer(middleware::from_fn_with_state(state, authenticate));

    Router::new().route("/", create.get(list_facilities))
}
