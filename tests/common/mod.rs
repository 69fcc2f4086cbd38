use axum::body::Body;
use axum::http::{Request, Response};
use barefoot_nomad::nomad_auth::{UserRole, create_access_token};
use barefoot_nomad::nomad_config::{CorsConfig, EmailConfig, JwtConfig};
use barefoot_nomad::nomad_core::hash_password;
use barefoot_nomad::router::init_router;
use barefoot_nomad::state::AppState;
use http_body_util::BodyExt;
use sqlx::PgPool;
use uuid::Uuid;

#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "Password123";

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[allow(dead_code)]
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_token_expiry: 3600,
        action_token_expiry: 600,
    }
}

pub fn test_state(pool: PgPool) -> AppState {
    dotenvy::dotenv().ok();
    AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        email_config: EmailConfig::disabled(),
        cors_config: CorsConfig::from_env(),
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(test_state(pool))
}

/// Inserts a verified user directly, bypassing signup.
pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    role: UserRole,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO users (first_name, last_name, email, password, role, is_verified)
        VALUES ($1, $2, $3, $4, $5, TRUE)
        RETURNING id
        "#,
    )
    .bind("Test")
    .bind("User")
    .bind(email)
    .bind(hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}

#[allow(dead_code)]
pub fn token_for(user: &TestUser) -> String {
    create_access_token(user.id, &user.email, user.role, &test_jwt_config()).unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4().simple())
}

/// Builds a JSON request; `token` goes in `x-access-token`.
#[allow(dead_code)]
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("x-access-token", token);
    }

    let body = match body {
        Some(value) => Body::from(serde_json::to_string(&value).unwrap()),
        None => Body::empty(),
    };

    builder.body(body).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
