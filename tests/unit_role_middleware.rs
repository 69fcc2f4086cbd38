use axum::http::{HeaderMap, HeaderValue, StatusCode};
use barefoot_nomad::middleware::auth::{AuthUser, extract_token};
use barefoot_nomad::middleware::role::{
    FACILITY_ADMINS, NOT_AUTHORIZED, SUPER_ADMINS, check_any_role,
};
use barefoot_nomad::nomad_auth::{Claims, UserRole};
use barefoot_nomad::nomad_core::ErrorBody;
use uuid::Uuid;

fn create_test_auth_user(role: UserRole) -> AuthUser {
    AuthUser(Claims {
        sub: Uuid::nil(),
        email: "test@example.com".to_string(),
        role,
        exp: 9999999999,
        iat: 1234567890,
    })
}

#[test]
fn test_facility_admins() {
    for role in [UserRole::TravelAdmin, UserRole::Manager, UserRole::SuperAdmin] {
        assert!(check_any_role(&create_test_auth_user(role), FACILITY_ADMINS).is_ok());
    }
    assert!(check_any_role(&create_test_auth_user(UserRole::Requester), FACILITY_ADMINS).is_err());
}

#[test]
fn test_super_admins_only() {
    assert!(check_any_role(&create_test_auth_user(UserRole::SuperAdmin), SUPER_ADMINS).is_ok());

    for role in [UserRole::Requester, UserRole::TravelAdmin, UserRole::Manager] {
        assert!(check_any_role(&create_test_auth_user(role), SUPER_ADMINS).is_err());
    }
}

#[test]
fn test_rejection_is_unauthorized_with_fixed_message() {
    let err = check_any_role(&create_test_auth_user(UserRole::Requester), SUPER_ADMINS)
        .unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.body, ErrorBody::Error(NOT_AUTHORIZED.to_string()));
}

#[test]
fn test_empty_allow_list_rejects_everyone() {
    for role in UserRole::ALL {
        assert!(check_any_role(&create_test_auth_user(role), &[]).is_err());
    }
}

#[test]
fn test_extract_token_prefers_access_token_header() {
    let mut headers = HeaderMap::new();
    headers.insert("authorization", HeaderValue::from_static("Bearer from-auth"));
    headers.insert("x-access-token", HeaderValue::from_static("from-custom"));
    assert_eq!(extract_token(&headers), Some("from-custom"));
}

#[test]
fn test_extract_token_from_authorization() {
    let mut headers = HeaderMap::new();
    headers.insert("authorization", HeaderValue::from_static("Bearer abc.def"));
    assert_eq!(extract_token(&headers), Some("abc.def"));

    headers.insert("authorization", HeaderValue::from_static("raw.token"));
    assert_eq!(extract_token(&headers), Some("raw.token"));
}

#[test]
fn test_extract_token_missing_or_blank() {
    let mut headers = HeaderMap::new();
    assert_eq!(extract_token(&headers), None);

    headers.insert("x-access-token", HeaderValue::from_static("   "));
    assert_eq!(extract_token(&headers), None);
}
