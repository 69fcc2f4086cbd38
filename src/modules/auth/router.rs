use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::auth::controller::{signin, signup, verify_email};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/verify/{token}", get(verify_email))
}
