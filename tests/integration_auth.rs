mod common;

use axum::http::StatusCode;
use barefoot_nomad::nomad_auth::{TokenPurpose, UserRole, create_action_token};
use common::{
    TEST_PASSWORD, body_json, create_test_user, generate_unique_email, json_request,
    setup_test_app, test_jwt_config,
};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn signup_body(email: &str) -> serde_json::Value {
    json!({
        "first_name": "Chioma",
        "last_name": "Dans",
        "email": email,
        "password": TEST_PASSWORD,
        "location": "Lagos"
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_success(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let email = generate_unique_email();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/signup",
            None,
            Some(signup_body(&email)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["email"], email);
    assert_eq!(body["data"]["role"], "requester");
    assert_eq!(body["data"]["is_verified"], false);
    assert_eq!(body["data"]["location"], "Lagos");
    assert!(body["data"]["token"].is_string());
    assert!(body["data"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_ignores_requested_role(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let mut body = signup_body(&generate_unique_email());
    body["role"] = json!("super_admin");

    let response = app
        .oneshot(json_request("POST", "/api/v1/auth/signup", None, Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["role"], "requester");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_duplicate_email(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, TEST_PASSWORD, UserRole::Requester).await;

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/signup",
            None,
            Some(signup_body(&email.to_uppercase())),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "user already registered");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_rejects_invalid_fields(pool: PgPool) {
    let cases = [
        ("first_name", json!("Ch10ma"), "First name must contain only letters"),
        ("last_name", json!(42), "Last name must be a string"),
        ("email", json!("not-an-email"), "Kindly provide a valid email"),
        ("email", json!(["chiomadans@gmail.com"]), "Kindly provide a valid email"),
        ("first_name", json!("a".repeat(256)), "Too long: enter a maximum of 255 characters"),
        ("password", json!("short1"), "Password must be at least 8 characters"),
        ("password", json!("pass word 123"), "Password must be alphanumeric"),
        ("gender", json!(1), "Gender must be a string"),
    ];

    for (field, value, message) in cases {
        let mut body = signup_body(&generate_unique_email());
        body[field] = value;

        let app = setup_test_app(pool.clone());
        let response = app
            .oneshot(json_request("POST", "/api/v1/auth/signup", None, Some(body)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", field);
        let body = body_json(response).await;
        assert_eq!(body["error"][0]["field"], field);
        assert_eq!(body["error"][0]["message"], message);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_missing_fields_reported_in_order(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/signup",
            None,
            Some(json!({ "email": generate_unique_email() })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    let errors = body["error"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0]["message"], "First name is required");
    assert_eq!(errors[1]["message"], "Last name is required");
    assert_eq!(errors[2]["message"], "Password is required");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_success(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, TEST_PASSWORD, UserRole::TravelAdmin).await;

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/signin",
            None,
            Some(json!({ "email": email, "password": TEST_PASSWORD })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["email"], email);
    assert_eq!(body["data"]["role"], "travel_admin");
    assert!(body["data"]["token"].is_string());
    assert!(body["data"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_failures_share_one_message(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, TEST_PASSWORD, UserRole::Requester).await;

    let bodies = [
        json!({ "email": email, "password": "WrongPassword1" }),
        json!({ "email": "nobody@test.com", "password": TEST_PASSWORD }),
        json!({ "email": "not-an-email", "password": TEST_PASSWORD }),
        json!({ "email": email }),
        json!({}),
    ];

    for body in bodies {
        let app = setup_test_app(pool.clone());
        let response = app
            .oneshot(json_request("POST", "/api/v1/auth/signin", None, Some(body)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"]["message"], "Incorrect email or password");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_verify_email(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &email, TEST_PASSWORD, UserRole::Requester).await;
    sqlx::query("UPDATE users SET is_verified = FALSE WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let token =
        create_action_token(user.id, &email, TokenPurpose::VerifyEmail, &test_jwt_config())
            .unwrap();

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/api/v1/auth/verify/{}", token),
            None,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["message"], "Your email has been verified");

    let verified: bool = sqlx::query_scalar("SELECT is_verified FROM users WHERE id = $1")
        .bind(user.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(verified);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_verify_email_rejects_reset_token(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &email, TEST_PASSWORD, UserRole::Requester).await;
    let token =
        create_action_token(user.id, &email, TokenPurpose::PasswordReset, &test_jwt_config())
            .unwrap();

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/api/v1/auth/verify/{}", token),
            None,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_health(pool: PgPool) {
    let app = setup_test_app(pool);
    let response = app
        .oneshot(json_request("GET", "/health", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}
