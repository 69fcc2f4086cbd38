use axum::{
    Router,
    routing::{patch, post},
};

use crate::modules::password_reset::controller::{request_password_reset, reset_password};
use crate::state::AppState;

pub fn init_password_reset_router() -> Router<AppState> {
    Router::new()
        .route("/", post(request_password_reset))
        .route("/{token}", patch(reset_password))
}
