use axum::{Router, middleware, routing::patch};

use crate::middleware::auth::authenticate;
use crate::middleware::role::require_super_admin;
use crate::modules::users::controller::update_role;
use crate::state::AppState;

pub fn init_users_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/role", patch(update_role))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_super_admin,
        ))
        .route_layer(middleware::from_fn_with_state(state, authenticate))
}
