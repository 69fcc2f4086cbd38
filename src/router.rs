use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::auth::ACCESS_TOKEN_HEADER;
use crate::modules::auth::init_auth_router;
use crate::modules::facilities::init_facilities_router;
use crate::modules::password_reset::init_password_reset_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(ACCESS_TOKEN_HEADER),
        ])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest(
            "/api/v1",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/user", init_users_router(state.clone()))
                .nest("/facilities", init_facilities_router(state.clone()))
                .nest("/password-reset", init_password_reset_router()),
        )
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
